//! Calendar document models
//!
//! A [`CalendarDocument`] carries the protocol metadata required by RFC 5545
//! and an ordered list of all-day [`CalendarEvent`]s. Rendering to the
//! textual iCalendar encoding lives in the calendar builder service.

use crate::constants::{CALENDAR_PRODUCT_ID, CALENDAR_VERSION};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single all-day calendar event
///
/// `end` is the exclusive boundary: the day after the last busy day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Event title shown in calendar views
    pub summary: String,

    /// First day of the event
    pub start: NaiveDate,

    /// Day after the last day of the event
    pub end: NaiveDate,

    /// Creation timestamp (DTSTAMP)
    pub created: DateTime<Utc>,

    /// Globally unique identifier (UID)
    pub uid: String,
}

impl CalendarEvent {
    /// Create an all-day event stamped with the current time and a fresh UID
    pub fn all_day(summary: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
            created: Utc::now(),
            uid: Uuid::new_v4().to_string(),
        }
    }

    /// Number of busy days covered by the event
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// An iCalendar document of all-day events
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDocument {
    product_id: &'static str,
    version: &'static str,
    events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    /// Create an empty document with the fixed protocol metadata
    pub fn new() -> Self {
        Self {
            product_id: CALENDAR_PRODUCT_ID,
            version: CALENDAR_VERSION,
            events: Vec::new(),
        }
    }

    /// Append an event after all existing events
    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// PRODID property value
    pub fn product_id(&self) -> &str {
        self.product_id
    }

    /// VERSION property value
    pub fn version(&self) -> &str {
        self.version
    }

    /// Events in insertion order
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for CalendarDocument {
    fn default() -> Self {
        Self::new()
    }
}
