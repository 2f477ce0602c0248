//! OOO Calendar Library
//!
//! A Rust library for converting Paylocity time-off reports (CSV exports)
//! into iCalendar documents of all-day out-of-office events.
//!
//! This library provides tools for:
//! - Parsing fixed-column report rows into typed leave records
//! - Classifying free-text leave type and status labels into closed enums
//! - Building RFC 5545 calendars with one all-day event per leave record
//! - Fetching the newest report from a local directory or an SFTP server
//! - Writing the rendered calendar atomically to a local file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod calendar_builder;
        pub mod report_parser;
        pub mod report_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::calendar::{CalendarDocument, CalendarEvent};
pub use app::models::{DateField, LeaveRecord, LeaveStatus, LeaveType};
pub use config::Config;

/// Result type alias for the OOO calendar converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Line-level CSV syntax error
    #[error("line {line}: {message}")]
    Csv {
        line: u64,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Row has fewer fields than the report layout requires
    #[error("row has {found} fields, expected at least {expected}")]
    RowTooShort { found: usize, expected: usize },

    /// Leave type label not present in the classification table
    #[error("unrecognized leave type: '{label}'")]
    UnknownLeaveType { label: String },

    /// Leave status label not present in the classification table
    #[error("unrecognized leave status: '{label}'")]
    UnknownLeaveStatus { label: String },

    /// Date column not in MM/DD/YYYY form
    #[error("invalid {field} date '{value}': expected MM/DD/YYYY")]
    InvalidDate {
        field: DateField,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Leave ends before it starts
    #[error("leave ends ({end}) before it starts ({start})")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Leave ends on the last representable date, leaving no exclusive end
    #[error("leave end date {date} is outside the supported range")]
    DateOutOfRange { date: chrono::NaiveDate },

    /// Combined name field is not "Lastname, Firstname"
    #[error("invalid name '{value}': expected 'Lastname, Firstname'")]
    InvalidName { value: String },

    /// Report rows failed validation and the run was not told to skip them
    #[error("{count} report row(s) failed validation; first at {first}")]
    RecordsRejected { count: usize, first: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// No report file matched in the source listing
    #[error("No report found in '{location}' matching '{pattern}'")]
    NoReportFound { location: String, pattern: String },

    /// Remote session could not be established or used
    #[error("Remote session error: {message}")]
    RemoteSession { message: String },

    /// Calendar output could not be written
    #[error("Output error for '{path}': {message}")]
    Output { path: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV syntax error at a 1-based line
    pub fn csv(line: u64, source: csv::Error) -> Self {
        Self::Csv {
            line,
            message: source.to_string(),
            source,
        }
    }

    /// Create an unknown leave type error
    pub fn unknown_leave_type(label: impl Into<String>) -> Self {
        Self::UnknownLeaveType {
            label: label.into(),
        }
    }

    /// Create an unknown leave status error
    pub fn unknown_leave_status(label: impl Into<String>) -> Self {
        Self::UnknownLeaveStatus {
            label: label.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(
        field: DateField,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
            source,
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(value: impl Into<String>) -> Self {
        Self::InvalidName {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a no report found error
    pub fn no_report_found(location: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::NoReportFound {
            location: location.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a remote session error
    pub fn remote_session(message: impl Into<String>) -> Self {
        Self::RemoteSession {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error invalidates a single report row rather than the whole run
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::RowTooShort { .. }
                | Self::UnknownLeaveType { .. }
                | Self::UnknownLeaveStatus { .. }
                | Self::InvalidDate { .. }
                | Self::InvalidDateRange { .. }
                | Self::DateOutOfRange { .. }
                | Self::InvalidName { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

#[cfg(feature = "sftp")]
impl From<ssh2::Error> for Error {
    fn from(error: ssh2::Error) -> Self {
        Self::RemoteSession {
            message: error.to_string(),
        }
    }
}
