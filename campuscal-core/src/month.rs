//! Month/year context detection for calendar header rows.
//!
//! A header row is any row whose concatenated cell text starts with a
//! Portuguese month name followed by a 4-digit year. Everything parsed
//! from that row inherits the resulting `MonthContext`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{ExtractError, ExtractResult};
use crate::table::Row;

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Month number, January = 1.
    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }
}

/// Portuguese month names as they appear in the source documents.
const MONTH_TABLE: [(&str, Month); 12] = [
    ("JANEIRO", Month::January),
    ("FEVEREIRO", Month::February),
    ("MARÇO", Month::March),
    ("ABRIL", Month::April),
    ("MAIO", Month::May),
    ("JUNHO", Month::June),
    ("JULHO", Month::July),
    ("AGOSTO", Month::August),
    ("SETEMBRO", Month::September),
    ("OUTUBRO", Month::October),
    ("NOVEMBRO", Month::November),
    ("DEZEMBRO", Month::December),
];

/// Month and year inherited by date expressions that omit a month.
/// Derived once per header row, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthContext {
    pub month: Month,
    pub year: i32,
}

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(JANEIRO|FEVEREIRO|MARÇO|ABRIL|MAIO|JUNHO|JULHO|AGOSTO|SETEMBRO|OUTUBRO|NOVEMBRO|DEZEMBRO)\s(\d{4})",
    )
    .unwrap()
});

/// Map a source-language month name onto the calendar month.
fn month_from_name(name: &str) -> ExtractResult<Month> {
    let upper = name.to_uppercase();
    MONTH_TABLE
        .iter()
        .find(|(pt, _)| *pt == upper)
        .map(|&(_, month)| month)
        .ok_or_else(|| ExtractError::UnknownMonth(name.to_string()))
}

/// Confirm the lookup table covers all 12 months. Called once at startup
/// so an incomplete table fails fast instead of mid-document.
pub fn validate_month_table() -> ExtractResult<()> {
    for number in 1..=12 {
        if !MONTH_TABLE.iter().any(|&(_, month)| month.number() == number) {
            return Err(ExtractError::UnknownMonth(format!(
                "no name maps to month {number}"
            )));
        }
    }
    Ok(())
}

/// Detect whether a row is a month/year header.
///
/// All non-null cells are concatenated and matched against the header
/// pattern. Rows that do not match (section headers, blank rows) yield
/// `None` and are skipped by the caller.
pub fn detect_header(row: &Row) -> ExtractResult<Option<MonthContext>> {
    let text: String = row.iter().flatten().map(String::as_str).collect();

    let Some(caps) = HEADER_RE.captures(&text) else {
        return Ok(None);
    };

    let month = month_from_name(&caps[1])?;
    // \d{4} cannot overflow i32
    let year: i32 = caps[2].parse().unwrap();

    Ok(Some(MonthContext { month, year }))
}
