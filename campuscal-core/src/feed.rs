//! iCalendar feed generation.

use icalendar::{Calendar, Component, EventLike, Property};

use crate::constants::{FEED_LOCATION, FEED_NAME, FEED_PRODID, FEED_TIMEZONE};
use crate::event::CalendarEvent;

/// Generate the .ics feed for an ordered event sequence.
pub fn generate_feed(events: &[CalendarEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("X-WR-CALNAME", FEED_NAME));
    calendar.append_property(Property::new("X-WR-TIMEZONE", FEED_TIMEZONE));

    for event in events {
        calendar.push(feed_event(event));
    }

    let calendar = calendar.done();
    replace_prodid(&calendar.to_string())
}

fn feed_event(event: &CalendarEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@campuscal", uuid::Uuid::new_v4()));
    ics_event.summary(&event.summary);
    ics_event.description(&event.description);

    // DTSTAMP - required by RFC 5545
    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_zoned_property(&mut ics_event, "DTSTART", event.start);
    add_zoned_property(&mut ics_event, "DTEND", event.end);

    ics_event.location(FEED_LOCATION);
    ics_event.add_property("CLASS", "PUBLIC");
    ics_event.add_property("CATEGORIES", event.category.as_str());

    ics_event.done()
}

/// Add a datetime property with the feed's TZID parameter
fn add_zoned_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    datetime: chrono::DateTime<chrono_tz::Tz>,
) {
    let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", FEED_TIMEZONE);
    ics_event.append_property(prop);
}

/// The icalendar crate stamps its own PRODID; swap in the feed's.
fn replace_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{FEED_PRODID}\r\n"));
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::TimeZone;
    use chrono_tz::America::Sao_Paulo;

    fn make_test_event() -> CalendarEvent {
        CalendarEvent {
            summary: "Matrículas".to_string(),
            description: "12 a 15 - Matrículas".to_string(),
            start: Sao_Paulo.with_ymd_and_hms(2023, 3, 12, 0, 0, 0).unwrap(),
            end: Sao_Paulo.with_ymd_and_hms(2023, 3, 16, 0, 0, 0).unwrap(),
            category: EventCategory::Students,
        }
    }

    #[test]
    fn test_generate_feed_metadata() {
        let ics = generate_feed(&[make_test_event()]);

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("VERSION:2.0"));
        assert!(ics.contains("PRODID:-//UFSCar Calendar//UFSCar//"));
        assert!(ics.contains("X-WR-CALNAME:UFSCar Calendar"));
        assert!(ics.contains("X-WR-TIMEZONE:America/Sao_Paulo"));
        assert!(ics.contains("END:VCALENDAR"));
    }

    #[test]
    fn test_generate_feed_event_properties() {
        let ics = generate_feed(&[make_test_event()]);

        assert!(ics.contains("SUMMARY:Matrículas"));
        assert!(ics.contains("DESCRIPTION:12 a 15 - Matrículas"));
        assert!(ics.contains("DTSTART;TZID=America/Sao_Paulo:20230312T000000"));
        assert!(ics.contains("DTEND;TZID=America/Sao_Paulo:20230316T000000"));
        assert!(ics.contains("LOCATION:UFSCar - São Carlos"));
        assert!(ics.contains("CLASS:PUBLIC"));
        assert!(ics.contains("CATEGORIES:students"));
    }

    #[test]
    fn test_generate_feed_one_vevent_per_event() {
        let ics = generate_feed(&[make_test_event(), make_test_event()]);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(ics.matches("END:VEVENT").count(), 2);
    }
}
