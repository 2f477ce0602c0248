//! Field parsing utilities for report rows
//!
//! This module provides helper functions for reading individual columns of a
//! report row with proper error handling and validation.

use crate::app::models::DateField;
use crate::constants::{MIN_ROW_FIELDS, REPORT_DATE_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDate;

/// Check that a row is wide enough for the fixed column layout
pub fn ensure_row_width<S: AsRef<str>>(row: &[S]) -> Result<()> {
    if row.len() < MIN_ROW_FIELDS {
        return Err(Error::RowTooShort {
            found: row.len(),
            expected: MIN_ROW_FIELDS,
        });
    }
    Ok(())
}

/// Get a raw column value from a row, untrimmed
pub fn get_field<S: AsRef<str>>(row: &[S], index: usize) -> Result<&str> {
    row.get(index).map(|s| s.as_ref()).ok_or(Error::RowTooShort {
        found: row.len(),
        expected: index + 1,
    })
}

/// Parse a report date column (MM/DD/YYYY)
pub fn parse_report_date(value: &str, field: DateField) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT)
        .map_err(|e| Error::invalid_date(field, value, e))
}

/// Reformat a Paylocity "Lastname, Firstname" name as "Firstname Lastname"
///
/// The value is split on its first comma and each part is trimmed. A value
/// without a comma, or with an empty part, is rejected.
pub fn name_from_paylocity_name(value: &str) -> Result<String> {
    let (last, first) = value
        .split_once(',')
        .ok_or_else(|| Error::invalid_name(value))?;

    let (first, last) = (first.trim(), last.trim());
    if first.is_empty() || last.is_empty() {
        return Err(Error::invalid_name(value));
    }

    Ok(format!("{} {}", first, last))
}
