//! Item parsing: date-range expression, connector, label.
//!
//! Every item must begin with `day[/month]`, optionally joined to a
//! second `day[/month]` by `a` (a contiguous range) or `e` (two disjoint
//! days). Sides that omit the month inherit it, along with the year,
//! from the enclosing `MonthContext`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::event::{Connector, NormalizedEvent};
use crate::month::MonthContext;

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<d1>\d{1,2})(/(?P<m1>\d{1,2}))?(\s(?P<conn>a|e)\s(?P<d2>\d{1,2})(/(?P<m2>\d{1,2}))?)?",
    )
    .unwrap()
});

/// The date expression plus its trailing separator, as stripped from the
/// front of the item to leave the display text.
static DATE_RANGE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})(/\d{1,2})?(\s(a|e)\s\d{1,2}(/\d{1,2})?)? (-|–)").unwrap()
});

/// Parse one normalized item string against its month context.
pub fn parse_item(item: &str, context: &MonthContext) -> ExtractResult<NormalizedEvent> {
    let caps = DATE_RANGE_RE
        .captures(item)
        .ok_or_else(|| ExtractError::MalformedItem(item.to_string()))?;

    let start = resolve_date(
        &caps["d1"],
        caps.name("m1").map(|m| m.as_str()),
        context,
    )?;

    let connector = match caps.name("conn") {
        None => Connector::None,
        Some(word) => match word.as_str().trim().to_lowercase().as_str() {
            "a" => Connector::To,
            "e" => Connector::And,
            other => return Err(ExtractError::UnknownConnector(other.to_string())),
        },
    };

    let end = match caps.name("d2") {
        Some(day) => resolve_date(day.as_str(), caps.name("m2").map(|m| m.as_str()), context)?,
        None => start,
    };

    if end < start {
        return Err(ExtractError::InvertedRange { start, end });
    }

    let display_text = DATE_RANGE_SEPARATOR_RE
        .replace(item, "")
        .trim()
        .to_string();

    Ok(NormalizedEvent {
        display_text,
        original_text: item.to_string(),
        start,
        connector,
        end,
    })
}

/// Resolve one side of a date expression to an absolute date.
///
/// An explicit `/month` wins over the context month; the year always
/// comes from the context. Impossible dates (day 31 in a 30-day month,
/// month 13) are fatal.
fn resolve_date(day: &str, month: Option<&str>, context: &MonthContext) -> ExtractResult<NaiveDate> {
    // \d{1,2} cannot overflow u32
    let day: u32 = day.parse().unwrap();
    let month: u32 = match month {
        Some(m) => m.parse().unwrap(),
        None => context.month.number(),
    };

    NaiveDate::from_ymd_opt(context.year, month, day).ok_or(ExtractError::ImpossibleDate {
        day,
        month,
        year: context.year,
    })
}
