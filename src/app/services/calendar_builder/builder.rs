//! Record to event mapping and document assembly

use crate::app::models::LeaveRecord;
use crate::app::models::calendar::{CalendarDocument, CalendarEvent};
use crate::config::CalendarConfig;
use tracing::{debug, info};

/// Builds calendar documents from leave records
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    config: CalendarConfig,
}

impl CalendarBuilder {
    /// Create a new builder with the given settings
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Build the event for a single record
    ///
    /// The event starts on the record's first day and ends on the day after
    /// its last day. DTSTAMP and UID are fresh for every call.
    pub fn event_for(&self, record: &LeaveRecord) -> CalendarEvent {
        let summary = format!("{} {}", record.name(), self.config.summary_suffix);
        CalendarEvent::all_day(summary, record.start_date(), record.day_after_end())
    }

    /// Build a document holding one event per record, in input order
    ///
    /// Records whose status is listed in `skip_statuses` produce no event.
    pub fn build(&self, records: &[LeaveRecord]) -> CalendarDocument {
        let mut document = CalendarDocument::new();

        for record in records {
            if self.config.skip_statuses.contains(&record.status()) {
                debug!(
                    "Skipping {} leave for {} ({} to {})",
                    record.status(),
                    record.name(),
                    record.start_date(),
                    record.end_date()
                );
                continue;
            }
            document.push(self.event_for(record));
        }

        info!(
            "Built calendar with {} events from {} records",
            document.len(),
            records.len()
        );
        document
    }
}

/// Build a document with default settings
pub fn build(records: &[LeaveRecord]) -> CalendarDocument {
    CalendarBuilder::default().build(records)
}
