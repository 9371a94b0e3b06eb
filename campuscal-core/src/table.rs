//! Input model for the document table reader.
//!
//! The upstream PDF table extractor is a black box. Its output is a JSON
//! document holding zero-or-one table per page, each table a sequence of
//! rows, each row a sequence of cells where a cell is either null or a
//! text string. No other structure is assumed.

use std::path::Path;

use serde::Deserialize;

use crate::error::ExtractResult;

/// One table row: nullable text cells.
pub type Row = Vec<Option<String>>;

/// One page's table, if the page had one.
pub type Table = Option<Vec<Row>>;

/// All extracted tables of one document, in page order.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTables(pub Vec<Table>);

impl DocumentTables {
    /// Iterate over every row of every table, in document order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.0.iter().filter_map(|table| table.as_ref()).flatten()
    }
}

/// Load a document's extracted tables from a JSON file.
pub fn load_tables(path: &Path) -> ExtractResult<DocumentTables> {
    let contents = std::fs::read_to_string(path)?;
    let tables = serde_json::from_str(&contents)?;
    Ok(tables)
}
