//! Data models for time-off report processing
//!
//! This module contains the core data structures for representing leave
//! records parsed from a Paylocity time-off report, together with the closed
//! classifications of leave type and leave status.

pub mod calendar;

use crate::constants::{LEAVE_STATUS_LABELS, LEAVE_TYPE_LABELS};
use crate::{Error, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Leave Type
// =============================================================================

/// Kind of leave taken, classified from the report's free-text type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Vacation and floating holidays
    Vacation,

    /// Sick leave, including COVID childcare
    Sick,

    /// Surge leave
    Surge,

    /// Bereavement leave
    Bereavement,

    /// Other statutory leave (military leave, jury duty)
    Leave,
}

impl LeaveType {
    /// Look up a report label, returning `None` when the label is not recognized
    pub fn from_label(label: &str) -> Option<Self> {
        LEAVE_TYPE_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, leave_type)| *leave_type)
    }

    /// Get all possible leave types
    pub fn all_values() -> [LeaveType; 5] {
        [
            LeaveType::Vacation,
            LeaveType::Sick,
            LeaveType::Surge,
            LeaveType::Bereavement,
            LeaveType::Leave,
        ]
    }
}

impl FromStr for LeaveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| Error::unknown_leave_type(s))
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::Sick => "Sick",
            LeaveType::Surge => "Surge",
            LeaveType::Bereavement => "Bereavement",
            LeaveType::Leave => "Leave",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Leave Status
// =============================================================================

/// Lifecycle state of a leave request, classified from the report's status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Leave already taken
    Taken,

    /// Request cancelled by the employee ("Cancelled" in the report)
    Canceled,

    /// Request declined by the approver
    Declined,

    /// Request approved, leave not yet taken
    Approved,

    /// Request submitted and awaiting approval ("Submitted" in the report)
    Requested,
}

impl LeaveStatus {
    /// Look up a report label, returning `None` when the label is not recognized
    pub fn from_label(label: &str) -> Option<Self> {
        LEAVE_STATUS_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, status)| *status)
    }

    /// Get all possible leave statuses
    pub fn all_values() -> [LeaveStatus; 5] {
        [
            LeaveStatus::Taken,
            LeaveStatus::Canceled,
            LeaveStatus::Declined,
            LeaveStatus::Approved,
            LeaveStatus::Requested,
        ]
    }
}

impl FromStr for LeaveStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| Error::unknown_leave_status(s))
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeaveStatus::Taken => "Taken",
            LeaveStatus::Canceled => "Canceled",
            LeaveStatus::Declined => "Declined",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Requested => "Requested",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Leave Record
// =============================================================================

/// Which of the two report date columns a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Start,
    End,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::Start => write!(f, "start"),
            DateField::End => write!(f, "end"),
        }
    }
}

/// One employee's leave, parsed from a single report row
///
/// Records are constructed whole through [`LeaveRecord::new`] and are
/// immutable afterwards. Both dates are inclusive calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRecord {
    name: String,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: LeaveStatus,
}

impl LeaveRecord {
    /// Create a new leave record
    ///
    /// Rejects a leave that ends before it starts, and one ending on
    /// `NaiveDate::MAX`, which has no following day to serve as the
    /// exclusive end of an all-day event.
    pub fn new(
        name: impl Into<String>,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: LeaveStatus,
    ) -> Result<Self> {
        if start_date > end_date {
            return Err(Error::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        if end_date.succ_opt().is_none() {
            return Err(Error::DateOutOfRange { date: end_date });
        }

        Ok(Self {
            name: name.into(),
            leave_type,
            start_date,
            end_date,
            status,
        })
    }

    /// Display name, "Firstname Lastname"
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn leave_type(&self) -> LeaveType {
        self.leave_type
    }

    /// First day of leave
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of leave (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    /// Day after the last day of leave
    pub fn day_after_end(&self) -> NaiveDate {
        // end_date < NaiveDate::MAX holds from construction
        self.end_date + Days::new(1)
    }

    /// Number of calendar days covered, counting both ends
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
