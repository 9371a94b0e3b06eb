//! Expansion of parsed events into calendar-ready instances.
//!
//! `e` ("and") names two disjoint single days and yields two events;
//! everything else yields one event whose end date is inclusive in civil
//! terms, so the emitted interval is end-exclusive `[start, end + 1 day)`.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;

use crate::error::{ExtractError, ExtractResult};
use crate::event::{CalendarEvent, Connector, EventCategory, MonthData, NormalizedEvent};

/// Expand all month sections into one flat event sequence: all holidays
/// in table order, then all student events, then all teacher events.
pub fn expand_events(months: &[MonthData]) -> ExtractResult<Vec<CalendarEvent>> {
    let mut events = Vec::new();

    for category in EventCategory::ALL {
        for month in months {
            for item in month.group(category) {
                expand_event(item, category, &mut events)?;
            }
        }
    }

    Ok(events)
}

/// Expand one parsed event into 1 or 2 calendar events by connector.
fn expand_event(
    event: &NormalizedEvent,
    category: EventCategory,
    out: &mut Vec<CalendarEvent>,
) -> ExtractResult<()> {
    match event.connector {
        // Two disjoint single-day events, however far apart the days are
        Connector::And => {
            out.push(single_day(event, event.start, category)?);
            out.push(single_day(event, event.end, category)?);
        }
        Connector::To | Connector::None => {
            out.push(CalendarEvent {
                summary: event.display_text.clone(),
                description: event.original_text.clone(),
                start: local_midnight(event.start)?,
                end: local_midnight(event.end + Duration::days(1))?,
                category,
            });
        }
    }
    Ok(())
}

fn single_day(
    event: &NormalizedEvent,
    day: NaiveDate,
    category: EventCategory,
) -> ExtractResult<CalendarEvent> {
    Ok(CalendarEvent {
        summary: event.display_text.clone(),
        description: event.original_text.clone(),
        start: local_midnight(day)?,
        end: local_midnight(day + Duration::days(1))?,
        category,
    })
}

/// Midnight of `date` in America/Sao_Paulo.
///
/// Historic Brazilian DST transitions happened at midnight, so a local
/// midnight can be ambiguous or nonexistent; the earliest valid instant
/// wins, and a day with no valid instant at all is a semantic error.
fn local_midnight(date: NaiveDate) -> ExtractResult<DateTime<Tz>> {
    use chrono::Datelike;

    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    Sao_Paulo
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(ExtractError::ImpossibleDate {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use chrono::Timelike;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn normalized(start: NaiveDate, connector: Connector, end: NaiveDate) -> NormalizedEvent {
        NormalizedEvent {
            display_text: "Matrículas".to_string(),
            original_text: "12 a 15 - Matrículas".to_string(),
            start,
            connector,
            end,
        }
    }

    fn month_data(holidays: Vec<NormalizedEvent>, students: Vec<NormalizedEvent>) -> MonthData {
        MonthData {
            month: Month::March,
            year: 2023,
            holidays,
            students,
            teachers: vec![],
        }
    }

    #[test]
    fn test_to_connector_yields_one_range_event() {
        let item = normalized(date(2023, 3, 12), Connector::To, date(2023, 3, 15));
        let events = expand_events(&[month_data(vec![], vec![item])]).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.start.date_naive(), date(2023, 3, 12));
        // End date is inclusive in civil terms, so the interval runs to the 16th
        assert_eq!(event.end.date_naive(), date(2023, 3, 16));
        assert_eq!(event.category, EventCategory::Students);
    }

    #[test]
    fn test_and_connector_yields_two_single_day_events() {
        let item = normalized(date(2023, 3, 20), Connector::And, date(2023, 3, 21));
        let events = expand_events(&[month_data(vec![], vec![item])]).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start.date_naive(), date(2023, 3, 20));
        assert_eq!(events[0].end.date_naive(), date(2023, 3, 21));
        assert_eq!(events[1].start.date_naive(), date(2023, 3, 21));
        assert_eq!(events[1].end.date_naive(), date(2023, 3, 22));
        assert_eq!(events[0].summary, events[1].summary);
    }

    #[test]
    fn test_and_connector_with_distant_days_still_yields_two() {
        let item = normalized(date(2023, 3, 1), Connector::And, date(2023, 3, 29));
        let events = expand_events(&[month_data(vec![], vec![item])]).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].end.date_naive(), date(2023, 3, 2));
        assert_eq!(events[1].start.date_naive(), date(2023, 3, 29));
    }

    #[test]
    fn test_single_day_event() {
        let item = normalized(date(2023, 12, 25), Connector::None, date(2023, 12, 25));
        let events = expand_events(&[month_data(vec![item], vec![])]).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start.date_naive(), date(2023, 12, 25));
        assert_eq!(events[0].end.date_naive(), date(2023, 12, 26));
        assert_eq!(events[0].category, EventCategory::Holidays);
    }

    #[test]
    fn test_events_are_grouped_category_major() {
        let holiday = normalized(date(2023, 3, 20), Connector::None, date(2023, 3, 20));
        let student = normalized(date(2023, 3, 12), Connector::None, date(2023, 3, 12));
        let first = month_data(vec![holiday.clone()], vec![student.clone()]);
        let second = MonthData {
            month: Month::April,
            year: 2023,
            holidays: vec![normalized(date(2023, 4, 21), Connector::None, date(2023, 4, 21))],
            students: vec![],
            teachers: vec![normalized(date(2023, 4, 28), Connector::None, date(2023, 4, 28))],
        };

        let events = expand_events(&[first, second]).unwrap();
        let categories: Vec<_> = events.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                EventCategory::Holidays,
                EventCategory::Holidays,
                EventCategory::Students,
                EventCategory::Teachers,
            ]
        );
        // Holidays from both months precede any student event
        assert_eq!(events[1].start.date_naive(), date(2023, 4, 21));
    }

    #[test]
    fn test_timestamps_are_sao_paulo_midnight() {
        let item = normalized(date(2023, 3, 12), Connector::None, date(2023, 3, 12));
        let events = expand_events(&[month_data(vec![item], vec![])]).unwrap();

        let start = events[0].start;
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.timezone(), Sao_Paulo);
        // São Paulo has been fixed at UTC-3 since DST was abolished
        use chrono::Offset;
        assert_eq!(start.offset().fix().local_minus_utc(), -3 * 3600);
    }
}
