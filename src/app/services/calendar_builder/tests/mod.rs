//! Test utilities for calendar builder testing

use crate::app::models::{LeaveRecord, LeaveStatus, LeaveType};
use chrono::NaiveDate;


pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The record produced by the reference report row
pub fn create_test_record() -> LeaveRecord {
    LeaveRecord::new(
        "Firstname Lastname",
        LeaveType::Vacation,
        date(2000, 1, 1),
        date(2000, 1, 2),
        LeaveStatus::Taken,
    )
    .unwrap()
}

/// A handful of records with mixed statuses
pub fn create_test_records() -> Vec<LeaveRecord> {
    vec![
        create_test_record(),
        LeaveRecord::new(
            "Grace Hopper",
            LeaveType::Vacation,
            date(2021, 7, 4),
            date(2021, 7, 4),
            LeaveStatus::Canceled,
        )
        .unwrap(),
        LeaveRecord::new(
            "Ada Lovelace",
            LeaveType::Leave,
            date(2021, 10, 11),
            date(2021, 10, 15),
            LeaveStatus::Requested,
        )
        .unwrap(),
    ]
}
