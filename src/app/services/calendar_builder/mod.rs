//! Calendar builder for leave records
//!
//! This module turns parsed leave records into an iCalendar document with one
//! all-day event per record, renders it to the RFC 5545 text encoding and
//! writes it to disk.
//!
//! # Architecture
//!
//! - [`builder`] - Record to event mapping and document assembly
//! - [`render`] - Conversion to the `icalendar` crate's types and text output
//! - [`writer`] - Atomic output file writing
//!
//! # All-day boundaries
//!
//! Leave records carry an inclusive end date. All-day events in iCalendar use
//! an exclusive end, so every event ends one day after the record's last day.
//!
//! # Basic Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ooo_calendar::app::services::calendar_builder::{build, render};
//! use ooo_calendar::{LeaveRecord, LeaveStatus, LeaveType};
//!
//! let day = NaiveDate::from_ymd_opt(2021, 10, 12).unwrap();
//! let record = LeaveRecord::new("Ada Lovelace", LeaveType::Sick, day, day, LeaveStatus::Taken)?;
//!
//! let document = build(&[record]);
//! let text = render(&document);
//!
//! assert!(text.contains("SUMMARY:Ada Lovelace is OOO"));
//! # Ok::<(), ooo_calendar::Error>(())
//! ```

pub mod builder;
pub mod render;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use builder::{CalendarBuilder, build};
pub use render::{render, to_icalendar};
pub use writer::write_calendar;
