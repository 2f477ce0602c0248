//! Test utilities for report parser testing
//!
//! This module provides sample rows, sample reports and helper functions
//! used across the parser test modules.

use chrono::NaiveDate;

mod record_parser_tests;

/// The reference row from the Paylocity report layout
pub fn sample_row() -> Vec<String> {
    [
        "Company:  (123456)",
        "GL Categor: ",
        "Practice: ",
        "Department: ",
        ": ",
        ": ",
        "Lastname, Firstname ",
        "000",
        "Vacation",
        "01/01/2000",
        "01/02/2000",
        "8.00",
        "100.00",
        "Taken",
        "Bosslast, Bossfirst",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The reference row with one column replaced
pub fn sample_row_with(index: usize, value: &str) -> Vec<String> {
    let mut row = sample_row();
    row[index] = value.to_string();
    row
}

/// Render one report line, quoting every field
pub fn csv_line(row: &[String]) -> String {
    row.iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// A report with title lines, a column header, blank separators and three data rows
pub fn create_test_report() -> String {
    let header: Vec<String> = [
        "Company", "GL Category", "Practice", "Department", "Cost Center", "Location",
        "Employee", "Id", "Type", "Start Date", "End Date", "Hours", "Percent", "Status",
        "Supervisor",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows = [
        csv_line(&sample_row()),
        csv_line(&employee_row("Hopper, Grace", "Floating Holiday", "07/04/2021", "07/04/2021", "Approved")),
        csv_line(&employee_row("Lovelace, Ada", "Jury Duty", "10/11/2021", "10/15/2021", "Submitted")),
    ];

    format!(
        "Time Off Requests\nReport Date,10/12/2021\n{}\n{}\n\n,,,\n{}\n\n{}\n",
        csv_line(&header),
        rows[0],
        rows[1],
        rows[2]
    )
}

/// A full-width row for a given employee
pub fn employee_row(name: &str, leave_type: &str, start: &str, end: &str, status: &str) -> Vec<String> {
    let mut row = sample_row();
    row[6] = name.to_string();
    row[8] = leave_type.to_string();
    row[9] = start.to_string();
    row[10] = end.to_string();
    row[13] = status.to_string();
    row
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
