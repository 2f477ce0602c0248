//! Parsing statistics and result structures for report processing
//!
//! This module provides types for tracking what happened to each row and for
//! handing parsed records and surfaced errors to the caller.

use crate::app::models::LeaveRecord;
use crate::{Error, Result};

/// An error tied to a 1-based line of the report
#[derive(Debug)]
pub struct RowError {
    /// Line on which the failing row starts
    pub line: u64,

    /// What went wrong
    pub error: Error,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Parsing result with records, surfaced errors and statistics
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Successfully parsed records, in report order
    pub records: Vec<LeaveRecord>,

    /// Data errors in full-width rows (unknown labels, bad dates, bad names)
    pub record_errors: Vec<RowError>,

    /// Line-level CSV syntax errors
    pub syntax_errors: Vec<RowError>,

    /// Row accounting
    pub stats: ParseStats,
}

impl ParseResult {
    /// Whether any row failed, at either the syntax or the record level
    pub fn has_errors(&self) -> bool {
        !self.record_errors.is_empty() || !self.syntax_errors.is_empty()
    }

    /// Return the records, or the first record error if any row failed validation
    ///
    /// Syntax errors are not considered here.
    pub fn into_records_strict(self) -> Result<Vec<LeaveRecord>> {
        match self.record_errors.into_iter().next() {
            Some(row_error) => Err(row_error.error),
            None => Ok(self.records),
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Rows read from the stream, including short and failed rows
    pub total_rows: usize,

    /// Rows with fewer than the required number of fields
    pub short_rows_skipped: usize,

    /// Column header rows skipped
    pub header_rows_skipped: usize,

    /// Rows turned into leave records
    pub records_parsed: usize,

    /// Full-width rows rejected with a record error
    pub records_failed: usize,

    /// Lines rejected by the CSV reader
    pub syntax_errors: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-width rows that were candidates for a record
    pub fn candidate_rows(&self) -> usize {
        self.records_parsed + self.records_failed
    }

    /// Calculate success rate over candidate rows as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.candidate_rows();
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }
}
