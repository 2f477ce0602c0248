//! Tests for single-row parsing

use super::*;
use crate::app::models::{DateField, LeaveRecord, LeaveStatus, LeaveType};
use crate::app::services::report_parser::parse_row;
use crate::Error;

#[test]
fn test_reference_row() {
    let record = parse_row(&sample_row()).unwrap();
    let expected = LeaveRecord::new(
        "Firstname Lastname",
        LeaveType::Vacation,
        date(2000, 1, 1),
        date(2000, 1, 2),
        LeaveStatus::Taken,
    )
    .unwrap();

    assert_eq!(record, expected);
}

#[test]
fn test_parse_is_pure() {
    let row = sample_row();
    assert_eq!(parse_row(&row).unwrap(), parse_row(&row).unwrap());
}

#[test]
fn test_synonym_labels_in_rows() {
    let cases = [
        ("Floating Holiday", LeaveType::Vacation),
        ("COVID Childcare", LeaveType::Sick),
        ("Jury Duty", LeaveType::Leave),
        ("Military Leave", LeaveType::Leave),
        ("Surge", LeaveType::Surge),
        ("Bereavement", LeaveType::Bereavement),
    ];

    for (label, expected) in cases {
        let record = parse_row(&sample_row_with(8, label)).unwrap();
        assert_eq!(record.leave_type(), expected, "label {}", label);
    }
}

#[test]
fn test_status_labels_in_rows() {
    let cases = [
        ("Submitted", LeaveStatus::Requested),
        ("Cancelled", LeaveStatus::Canceled),
        ("Declined", LeaveStatus::Declined),
        ("Approved", LeaveStatus::Approved),
    ];

    for (label, expected) in cases {
        let record = parse_row(&sample_row_with(13, label)).unwrap();
        assert_eq!(record.status(), expected, "label {}", label);
    }
}

#[test]
fn test_unknown_leave_type_names_label() {
    match parse_row(&sample_row_with(8, "Unpaid")) {
        Err(Error::UnknownLeaveType { label }) => assert_eq!(label, "Unpaid"),
        other => panic!("expected UnknownLeaveType, got {:?}", other),
    }
}

#[test]
fn test_unknown_status_names_label() {
    match parse_row(&sample_row_with(13, "Pending")) {
        Err(Error::UnknownLeaveStatus { label }) => assert_eq!(label, "Pending"),
        other => panic!("expected UnknownLeaveStatus, got {:?}", other),
    }
}

#[test]
fn test_bad_dates_name_the_field() {
    match parse_row(&sample_row_with(9, "2000-01-01")) {
        Err(Error::InvalidDate { field, value, .. }) => {
            assert_eq!(field, DateField::Start);
            assert_eq!(value, "2000-01-01");
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }

    match parse_row(&sample_row_with(10, "tomorrow")) {
        Err(Error::InvalidDate { field, .. }) => assert_eq!(field, DateField::End),
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn test_end_before_start_rejected() {
    let row = sample_row_with(10, "12/31/1999");
    assert!(matches!(
        parse_row(&row),
        Err(Error::InvalidDateRange { .. })
    ));
}

#[test]
fn test_name_without_comma_rejected() {
    assert!(matches!(
        parse_row(&sample_row_with(6, "Firstname Lastname")),
        Err(Error::InvalidName { .. })
    ));
}

#[test]
fn test_short_row_rejected() {
    let row: Vec<String> = sample_row().into_iter().take(14).collect();
    assert!(matches!(
        parse_row(&row),
        Err(Error::RowTooShort {
            found: 14,
            expected: 15
        })
    ));
}

#[test]
fn test_extra_columns_ignored() {
    let mut row = sample_row();
    row.push("extra".to_string());
    row.push("more".to_string());
    assert_eq!(parse_row(&row).unwrap(), parse_row(&sample_row()).unwrap());
}
