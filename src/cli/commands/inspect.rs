//! Inspect command implementation
//!
//! Parses a report and prints what the converter would see, without building
//! or writing a calendar. Useful for checking a new report layout or tracking
//! down rejected rows.

use super::shared::{load_configuration, open_report_stream, setup_logging};
use crate::app::services::report_parser::{ParseResult, ParseStats, ReportParser, RowError};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::LeaveRecord;
use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// One rejected row in the JSON listing
#[derive(Debug, Serialize)]
struct RowErrorEntry {
    line: u64,
    message: String,
}

impl From<&RowError> for RowErrorEntry {
    fn from(row_error: &RowError) -> Self {
        Self {
            line: row_error.line,
            message: row_error.error.to_string(),
        }
    }
}

/// JSON view of a parsed report
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    report: &'a str,
    records: &'a [LeaveRecord],
    record_errors: Vec<RowErrorEntry>,
    syntax_errors: Vec<RowErrorEntry>,
    stats: &'a ParseStats,
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> anyhow::Result<ParseStats> {
    setup_logging(&args.verbosity);
    info!("Inspecting time-off report");

    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    let (report_name, reader) = open_report_stream(&config, &args.source, args.input.as_deref())
        .context("Failed to open time-off report")?;

    let result = ReportParser::new(config.parser.clone()).parse_reader(reader);

    match args.output_format {
        OutputFormat::Human => print_human(&report_name, &result),
        OutputFormat::Json => {
            let view = InspectReport {
                report: &report_name,
                records: &result.records,
                record_errors: result.record_errors.iter().map(RowErrorEntry::from).collect(),
                syntax_errors: result.syntax_errors.iter().map(RowErrorEntry::from).collect(),
                stats: &result.stats,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(result.stats)
}

fn print_human(report_name: &str, result: &ParseResult) {
    println!("{} {}", "Report:".bold(), report_name.bright_cyan());
    println!();

    if result.records.is_empty() {
        println!("  {}", "No leave records found".yellow());
    }
    for record in &result.records {
        println!(
            "  {:<28} {:<12} {} .. {}  {:<10} ({} day{})",
            record.name(),
            record.leave_type().to_string(),
            record.start_date(),
            record.end_date(),
            record.status().to_string(),
            record.duration_days(),
            if record.duration_days() == 1 { "" } else { "s" }
        );
    }

    if !result.record_errors.is_empty() {
        println!();
        println!("{}", "Rejected rows:".red().bold());
        for row_error in &result.record_errors {
            println!("  {}", row_error);
        }
    }

    if !result.syntax_errors.is_empty() {
        println!();
        println!("{}", "Unreadable lines:".yellow().bold());
        for syntax_error in &result.syntax_errors {
            println!("  {}", syntax_error);
        }
    }

    let stats = &result.stats;
    println!();
    println!(
        "{} rows read, {} records, {} rejected, {} short rows skipped, {} header rows skipped ({:.1}% success)",
        stats.total_rows,
        stats.records_parsed,
        stats.records_failed,
        stats.short_rows_skipped,
        stats.header_rows_skipped,
        stats.success_rate()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::VerbosityArgs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_counts_rows_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("report.csv");
        std::fs::write(
            &input,
            "Time Off Requests\n\
             c,g,p,d,x,y,\"Lovelace, Ada\",1,Vacation,10/11/2021,10/12/2021,16,100,Taken,boss\n\
             c,g,p,d,x,y,\"Hopper, Grace\",2,Unpaid,10/11/2021,10/12/2021,16,100,Taken,boss\n",
        )
        .unwrap();

        let args = InspectArgs {
            input: Some(input),
            verbosity: VerbosityArgs {
                verbose: 0,
                quiet: true,
            },
            output_format: OutputFormat::Json,
            ..InspectArgs::default()
        };

        let stats = run_inspect(args).unwrap();

        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.short_rows_skipped, 1);
        assert_eq!(stats.records_parsed, 1);
        assert_eq!(stats.records_failed, 1);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
