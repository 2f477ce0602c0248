//! Row parser for Paylocity time-off reports
//!
//! This module turns the CSV text of a time-off report into an ordered
//! sequence of [`LeaveRecord`](crate::app::models::LeaveRecord)s. The report
//! has a fixed column layout; only five columns are read and everything else
//! is ignored.
//!
//! ## Architecture
//!
//! - [`parser`] - Stream reading, short-row tolerance and error collection
//! - [`record_parser`] - Conversion of one row into a leave record
//! - [`field_parsers`] - Column access, date parsing and name normalization
//! - [`line_index`] - Real source line numbers for records and errors
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Error policy
//!
//! Line-level CSV syntax errors are recorded with their line number and
//! parsing continues. Rows with fewer than 15 fields are skipped silently, as
//! are column header rows (see [`ReportParser`]).
//! Any data error inside a full-width row (unknown label, bad date, bad name)
//! is kept in [`ParseResult::record_errors`]; it is never dropped, and the
//! caller decides whether it aborts the run.
//!
//! ## Usage
//!
//! ```rust
//! use ooo_calendar::app::services::report_parser::parse_all;
//!
//! let report = "a,b,c,d,e,f,\"Lovelace, Ada\",x,Vacation,01/03/2022,01/04/2022,16,0,Taken,z\n";
//! let result = parse_all(report.as_bytes());
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].name(), "Ada Lovelace");
//! ```

pub mod field_parsers;
pub mod line_index;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_parsers::name_from_paylocity_name;
pub use parser::{ReportParser, parse_all};
pub use record_parser::parse_row;
pub use stats::{ParseResult, ParseStats, RowError};
