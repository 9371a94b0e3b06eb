//! Core pipeline for turning an academic institution's calendar tables
//! into dated events and an iCalendar feed.
//!
//! The stages run strictly one-way:
//! - `table` models what the external document-table reader produces
//! - `month` finds month/year header rows
//! - `layout` picks the three content columns out of a header row
//! - `segment` splits a column's text into individual item strings
//! - `parse` turns an item string into a `NormalizedEvent`
//! - `extract` drives the above into per-month `MonthData` records
//! - `expand` applies the connector semantics to produce `CalendarEvent`s
//! - `feed` serializes the events as an iCalendar document

pub mod constants;
pub mod error;
pub mod event;
pub mod expand;
pub mod extract;
pub mod feed;
pub mod layout;
pub mod month;
pub mod parse;
pub mod segment;
pub mod table;

pub use error::{ExtractError, ExtractResult};
pub use event::*;
pub use month::{Month, MonthContext};
