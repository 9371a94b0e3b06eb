//! Event records produced by the pipeline.
//!
//! `NormalizedEvent` and `MonthData` are what extraction yields and what
//! the JSON inspection artifact serializes; `CalendarEvent` is what the
//! expander hands to the feed serializer.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::month::Month;

/// How two date expressions in one item relate.
///
/// `To` joins a contiguous range, `And` names two disjoint single days;
/// the distinction changes how many calendar events are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    None,
    To,
    And,
}

/// One parsed calendar item.
///
/// `end >= start` always holds; when the item named a single day,
/// `end == start` and `connector` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    /// Item label with the leading date expression stripped.
    pub display_text: String,
    /// The normalized item string as segmented, untouched.
    pub original_text: String,
    pub start: NaiveDate,
    pub connector: Connector,
    pub end: NaiveDate,
}

/// All events parsed from one header row, grouped by audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthData {
    pub month: Month,
    pub year: i32,
    pub holidays: Vec<NormalizedEvent>,
    pub students: Vec<NormalizedEvent>,
    pub teachers: Vec<NormalizedEvent>,
}

impl MonthData {
    /// The events of one category, in original table order.
    pub fn group(&self, category: EventCategory) -> &[NormalizedEvent] {
        match category {
            EventCategory::Holidays => &self.holidays,
            EventCategory::Students => &self.students,
            EventCategory::Teachers => &self.teachers,
        }
    }
}

/// Which content column an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Holidays,
    Students,
    Teachers,
}

impl EventCategory {
    /// All categories in feed output order.
    pub const ALL: [EventCategory; 3] = [
        EventCategory::Holidays,
        EventCategory::Students,
        EventCategory::Teachers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Holidays => "holidays",
            EventCategory::Students => "students",
            EventCategory::Teachers => "teachers",
        }
    }
}

/// A calendar-ready event instance, end-exclusive, timezone-bound.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub category: EventCategory,
}
