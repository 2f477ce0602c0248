//! Individual report row processing
//!
//! This module converts one raw report row into a typed [`LeaveRecord`].

use super::field_parsers::{
    ensure_row_width, get_field, name_from_paylocity_name, parse_report_date,
};
use crate::app::models::{DateField, LeaveRecord, LeaveStatus, LeaveType};
use crate::constants::columns;
use crate::Result;

/// Parse a single report row into a leave record
///
/// Reads the name, leave type, start date, end date and status columns. Any
/// unrecognized label, malformed date or malformed name fails the whole row;
/// no default value is substituted.
pub fn parse_row<S: AsRef<str>>(row: &[S]) -> Result<LeaveRecord> {
    ensure_row_width(row)?;

    let name = name_from_paylocity_name(get_field(row, columns::NAME)?)?;
    let leave_type: LeaveType = get_field(row, columns::LEAVE_TYPE)?.parse()?;
    let start_date = parse_report_date(get_field(row, columns::START_DATE)?, DateField::Start)?;
    let end_date = parse_report_date(get_field(row, columns::END_DATE)?, DateField::End)?;
    let status: LeaveStatus = get_field(row, columns::STATUS)?.parse()?;

    LeaveRecord::new(name, leave_type, start_date, end_date, status)
}
