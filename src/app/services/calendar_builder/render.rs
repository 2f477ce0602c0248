//! RFC 5545 rendering
//!
//! Serialization (CRLF line endings, line folding, escaping) is delegated to
//! the `icalendar` crate.

use crate::app::models::calendar::{CalendarDocument, CalendarEvent};
use icalendar::{Calendar, Component, Event, EventLike};

/// Convert one event, with date-only DTSTART and DTEND
fn to_ical_event(event: &CalendarEvent) -> Event {
    Event::new()
        .summary(&event.summary)
        .starts(event.start)
        .ends(event.end)
        .timestamp(event.created)
        .uid(&event.uid)
        .done()
}

/// Convert a document into an `icalendar::Calendar`
pub fn to_icalendar(document: &CalendarDocument) -> Calendar {
    let mut calendar = Calendar::new();
    for event in document.events() {
        calendar.push(to_ical_event(event));
    }
    calendar.done()
}

/// Render a document to its iCalendar text encoding
pub fn render(document: &CalendarDocument) -> String {
    to_icalendar(document).to_string()
}
