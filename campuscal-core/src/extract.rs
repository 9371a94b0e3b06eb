//! Extraction entry points: raw tables in, `MonthData` records out.
//!
//! Any error aborts the whole document. Callers batching several
//! documents isolate failures per document themselves.

use std::path::Path;

use log::debug;

use crate::error::ExtractResult;
use crate::event::{MonthData, NormalizedEvent};
use crate::month::{self, MonthContext};
use crate::table::{self, DocumentTables};
use crate::{layout, parse, segment};

/// Extract every month section of a document.
///
/// Rows that are not month/year headers are skipped; each header row
/// yields one `MonthData`, in row order.
pub fn extract_document(tables: &DocumentTables) -> ExtractResult<Vec<MonthData>> {
    let mut months = Vec::new();

    for row in tables.rows() {
        let Some(context) = month::detect_header(row)? else {
            continue;
        };

        let (holidays, students, teachers) = layout::select_columns(row)?;
        let data = MonthData {
            month: context.month,
            year: context.year,
            holidays: parse_column(holidays, &context)?,
            students: parse_column(students, &context)?,
            teachers: parse_column(teachers, &context)?,
        };

        debug!(
            "{:?} {}: {} holidays, {} student events, {} teacher events",
            data.month,
            data.year,
            data.holidays.len(),
            data.students.len(),
            data.teachers.len()
        );
        months.push(data);
    }

    Ok(months)
}

/// Load a tables file and extract it in one step.
pub fn extract_file(path: &Path) -> ExtractResult<Vec<MonthData>> {
    let tables = table::load_tables(path)?;
    extract_document(&tables)
}

fn parse_column(text: &str, context: &MonthContext) -> ExtractResult<Vec<NormalizedEvent>> {
    segment::split_items(text)
        .iter()
        .map(|item| parse::parse_item(item, context))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::event::Connector;
    use crate::month::Month;
    use crate::table::Row;

    fn header_row(header: &str, holidays: &str, students: &str, teachers: &str) -> Row {
        let mut row: Row = vec![None; 18];
        row[0] = Some(header.to_string());
        row[9] = Some(holidays.to_string());
        row[12] = Some(students.to_string());
        row[15] = Some(teachers.to_string());
        row
    }

    fn document(rows: Vec<Row>) -> DocumentTables {
        DocumentTables(vec![Some(rows)])
    }

    #[test]
    fn test_extract_document() {
        let tables = document(vec![
            vec![Some("Calendário Acadêmico 2023".to_string())],
            header_row(
                "MARÇO 2023",
                "20 - Feriado",
                "12 a 15 - Matrículas\n20 e 21 - Recesso",
                "",
            ),
            header_row("ABRIL 2023", "", "3 - Início das aulas", "28 - Conselho"),
        ]);

        let months = extract_document(&tables).unwrap();
        assert_eq!(months.len(), 2);

        let march = &months[0];
        assert_eq!(march.month, Month::March);
        assert_eq!(march.year, 2023);
        assert_eq!(march.holidays.len(), 1);
        assert_eq!(march.students.len(), 2);
        assert!(march.teachers.is_empty());
        assert_eq!(march.students[0].display_text, "Matrículas");
        assert_eq!(march.students[1].connector, Connector::And);

        let april = &months[1];
        assert_eq!(april.month, Month::April);
        assert_eq!(april.teachers[0].display_text, "Conselho");
    }

    #[test]
    fn test_extract_document_null_cells_yield_no_items() {
        let mut row: Row = vec![None; 18];
        row[0] = Some("MAIO 2022".to_string());

        let months = extract_document(&document(vec![row])).unwrap();
        assert_eq!(months.len(), 1);
        assert!(months[0].holidays.is_empty());
        assert!(months[0].students.is_empty());
        assert!(months[0].teachers.is_empty());
    }

    #[test]
    fn test_extract_document_bad_width_header_row_aborts() {
        let mut row: Row = vec![None; 17];
        row[0] = Some("MARÇO 2023".to_string());

        let err = extract_document(&document(vec![row])).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidRowWidth(17)));
    }

    #[test]
    fn test_extract_document_malformed_item_aborts() {
        let tables = document(vec![header_row(
            "MARÇO 2023",
            "Feriado - 20",
            "",
            "",
        )]);

        let err = extract_document(&tables).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedItem(_)));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let tables = document(vec![header_row(
            "MARÇO 2023",
            "20 - Feriado",
            "12 a 15 - Matrículas",
            "25/12 - Natal",
        )]);

        let first = serde_json::to_string(&extract_document(&tables).unwrap()).unwrap();
        let second = serde_json::to_string(&extract_document(&tables).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
