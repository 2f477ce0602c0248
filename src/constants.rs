//! Application constants for the OOO calendar converter
//!
//! This module contains the report column layout, the label classification
//! tables, and the default values used throughout the application.

use crate::app::models::{LeaveStatus, LeaveType};

// =============================================================================
// Report Column Layout
// =============================================================================

/// Fixed column positions in a Paylocity time-off report row (0-indexed)
pub mod columns {
    /// Combined "Lastname, Firstname" employee name
    pub const NAME: usize = 6;

    /// Leave type label (e.g. "Vacation", "Jury Duty")
    pub const LEAVE_TYPE: usize = 8;

    /// First day of leave, MM/DD/YYYY
    pub const START_DATE: usize = 9;

    /// Last day of leave (inclusive), MM/DD/YYYY
    pub const END_DATE: usize = 10;

    /// Request status label (e.g. "Taken", "Cancelled")
    pub const STATUS: usize = 13;
}

/// Column header cells that mark a row as the report's header rather than data
pub mod header_labels {
    /// Header cell above the leave type column
    pub const LEAVE_TYPE: &str = "Type";

    /// Header cell above the status column
    pub const STATUS: &str = "Status";
}

/// Rows with fewer fields than this are blank separator lines and are skipped
pub const MIN_ROW_FIELDS: usize = 15;

/// Date format used by the report's date columns
pub const REPORT_DATE_FORMAT: &str = "%m/%d/%Y";

// =============================================================================
// Label Classification Tables
// =============================================================================

/// Report labels for each leave type (exact, case-sensitive match)
pub const LEAVE_TYPE_LABELS: &[(&str, LeaveType)] = &[
    ("Vacation", LeaveType::Vacation),
    ("Floating Holiday", LeaveType::Vacation),
    ("Sick", LeaveType::Sick),
    ("COVID Childcare", LeaveType::Sick),
    ("Surge", LeaveType::Surge),
    ("Bereavement", LeaveType::Bereavement),
    ("Military Leave", LeaveType::Leave),
    ("Jury Duty", LeaveType::Leave),
];

/// Report labels for each leave status (exact, case-sensitive match)
pub const LEAVE_STATUS_LABELS: &[(&str, LeaveStatus)] = &[
    ("Taken", LeaveStatus::Taken),
    ("Cancelled", LeaveStatus::Canceled),
    ("Declined", LeaveStatus::Declined),
    ("Approved", LeaveStatus::Approved),
    ("Submitted", LeaveStatus::Requested),
];

// =============================================================================
// Calendar Defaults
// =============================================================================

/// Text appended to the employee name in each event summary
pub const DEFAULT_SUMMARY_SUFFIX: &str = "is OOO";

/// Product identifier emitted by the iCalendar serializer
pub const CALENDAR_PRODUCT_ID: &str = "ICALENDAR-RS";

/// iCalendar format version
pub const CALENDAR_VERSION: &str = "2.0";

// =============================================================================
// Source and Output Defaults
// =============================================================================

/// Paylocity SFTP host
pub const DEFAULT_SERVER: &str = "ftp.paylocity.com";

/// SFTP port
pub const DEFAULT_PORT: u16 = 22;

/// Paylocity tenant account name
pub const DEFAULT_USERNAME: &str = "truss";

/// Environment variable holding the SFTP password
pub const PASSWORD_ENV_VAR: &str = "PAYLOCITY_PASSWORD";

/// Remote directory holding the reports
pub const DEFAULT_REMOTE_DIR: &str = ".";

/// Report filename filter; names embed a sortable date, e.g. Time_Off_Requests_20211012.csv
pub const DEFAULT_REPORT_PATTERN: &str = "*.csv";

/// Default calendar output file
pub const DEFAULT_OUTPUT_PATH: &str = "output.ics";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "ooo-calendar";

/// Config file name within the application config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_layout_fits_minimum_row() {
        let highest = [
            columns::NAME,
            columns::LEAVE_TYPE,
            columns::START_DATE,
            columns::END_DATE,
            columns::STATUS,
        ]
        .into_iter()
        .max()
        .unwrap();
        assert!(highest < MIN_ROW_FIELDS);
    }

    #[test]
    fn test_every_variant_has_a_label() {
        for leave_type in LeaveType::all_values() {
            assert!(LEAVE_TYPE_LABELS.iter().any(|(_, t)| *t == leave_type));
        }
        for status in LeaveStatus::all_values() {
            assert!(LEAVE_STATUS_LABELS.iter().any(|(_, s)| *s == status));
        }
    }
}
