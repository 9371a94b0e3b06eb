//! Column selection for the recognized table layouts.
//!
//! The source documents lay their tables out with a varying number of
//! cells per row; the positions of the three content columns are keyed
//! on the total row width. This is a deliberately closed enumeration:
//! a new document layout gets a new match arm, it is never inferred.

use crate::error::{ExtractError, ExtractResult};
use crate::table::Row;

/// Locate the holidays, students and teachers columns of a header row.
///
/// A null cell reads as empty text (zero items). A row width outside the
/// supported set is a fatal layout error.
pub fn select_columns(row: &Row) -> ExtractResult<(&str, &str, &str)> {
    let (holidays, students, teachers) = match row.len() {
        12 => (9, 10, 11),
        16 => (9, 10, 13),
        18 => (9, 12, 15),
        19 => (10, 13, 16),
        width => return Err(ExtractError::InvalidRowWidth(width)),
    };

    Ok((cell(row, holidays), cell(row, students), cell(row, teachers)))
}

fn cell(row: &Row, index: usize) -> &str {
    row.get(index).and_then(|cell| cell.as_deref()).unwrap_or("")
}
