//! Integration tests for the report to calendar pipeline
//!
//! These tests drive a real report file through a local report source, the
//! parser, the calendar builder and the atomic writer.

use chrono::NaiveDate;
use ooo_calendar::app::services::calendar_builder::{CalendarBuilder, render, write_calendar};
use ooo_calendar::app::services::report_parser::ReportParser;
use ooo_calendar::app::services::report_source::{LocalDirSource, open_latest};
use ooo_calendar::config::{CalendarConfig, ParserConfig};
use ooo_calendar::{LeaveStatus, LeaveType};
use std::path::Path;
use tempfile::TempDir;

const REPORT_NAME: &str = "Time_Off_Requests_20211012.csv";

fn fixture_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

fn header_skipping_parser() -> ReportParser {
    ReportParser::new(ParserConfig {
        skip_header_row: true,
    })
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Every data row of the reference report becomes one record, in report order
#[test]
fn test_reference_report_yields_every_row_in_order() {
    let source = LocalDirSource::new(fixture_dir()).unwrap();
    let (name, reader) = open_latest(&source, "Time_Off_Requests_*.csv").unwrap();
    assert_eq!(name, REPORT_NAME);

    let result = header_skipping_parser().parse_reader(reader);

    assert!(!result.has_errors(), "unexpected errors: {:?}", result.record_errors);
    assert_eq!(result.stats.header_rows_skipped, 1);

    let names: Vec<&str> = result.records.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec![
            "Ada Lovelace",
            "Alan Turing",
            "Grace Hopper",
            "Charles Babbage",
            "Margaret Hamilton",
            "Barbara Liskov",
        ]
    );

    let types: Vec<LeaveType> = result.records.iter().map(|r| r.leave_type()).collect();
    assert_eq!(
        types,
        vec![
            LeaveType::Vacation,
            LeaveType::Sick,
            LeaveType::Vacation,
            LeaveType::Leave,
            LeaveType::Sick,
            LeaveType::Bereavement,
        ]
    );

    let statuses: Vec<LeaveStatus> = result.records.iter().map(|r| r.status()).collect();
    assert_eq!(
        statuses,
        vec![
            LeaveStatus::Approved,
            LeaveStatus::Taken,
            LeaveStatus::Requested,
            LeaveStatus::Canceled,
            LeaveStatus::Declined,
            LeaveStatus::Taken,
        ]
    );

    // Leave spanning a year boundary
    assert_eq!(result.records[4].start_date(), date(2021, 12, 30));
    assert_eq!(result.records[4].end_date(), date(2022, 1, 3));
}

/// The column header row is recognized by its labels without any setting
#[test]
fn test_reference_report_header_recognized_by_default() {
    let source = LocalDirSource::new(fixture_dir()).unwrap();
    let (_, reader) = open_latest(&source, "*.csv").unwrap();

    let result = ReportParser::default().parse_reader(reader);

    assert!(!result.has_errors());
    assert_eq!(result.records.len(), 6);
    assert_eq!(result.stats.header_rows_skipped, 1);
}

/// A bad row appended after the report's blank separators keeps its real line
#[test]
fn test_rejected_row_reports_source_line() {
    let mut report = std::fs::read_to_string(fixture_dir().join(REPORT_NAME)).unwrap();
    let lines_before = report.lines().count() as u64;
    report.push_str(
        "\"Company:  (123456)\",\"\",\"\",\"\",\"\",\"\",\"Hopper, Grace\",\"107\",\"Unpaid\",\
         \"10/11/2021\",\"10/11/2021\",\"8.00\",\"100.00\",\"Taken\",\"\"\n",
    );

    let result = ReportParser::default().parse_reader(report.as_bytes());

    assert_eq!(result.records.len(), 6);
    assert_eq!(result.record_errors.len(), 1);
    assert_eq!(result.record_errors[0].line, lines_before + 1);
}

#[test]
fn test_reference_report_to_calendar_file() {
    let source = LocalDirSource::new(fixture_dir()).unwrap();
    let (_, reader) = open_latest(&source, "*.csv").unwrap();
    let records = header_skipping_parser()
        .parse_reader(reader)
        .into_records_strict()
        .unwrap();

    let document = CalendarBuilder::new(CalendarConfig::default()).build(&records);
    assert_eq!(document.len(), records.len());

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("ooo.ics");
    let bytes = write_calendar(&document, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.len() as u64, bytes);
    assert_eq!(written, render(&document));
    assert!(written.starts_with("BEGIN:VCALENDAR\r\n"));
    assert_eq!(written.matches("BEGIN:VEVENT").count(), 6);
    assert!(written.contains("SUMMARY:Ada Lovelace is OOO"));

    // Single-day leave ends the following day
    assert!(written.contains("DTSTART;VALUE=DATE:20211011"));
    assert!(written.contains("DTEND;VALUE=DATE:20211012"));

    // Year-boundary leave ends the day after its last inclusive day
    assert!(written.contains("DTEND;VALUE=DATE:20220104"));

    // Nothing but the output file is left behind
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}
