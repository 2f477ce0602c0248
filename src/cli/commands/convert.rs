//! Convert command implementation
//!
//! This module contains the complete conversion workflow: configuration
//! loading, report fetching, parsing, calendar building, output writing and
//! the final summary report.

use super::shared::{
    ConversionStats, create_spinner, load_configuration, open_report_stream, setup_logging,
};
use crate::Error;
use crate::app::services::calendar_builder::{CalendarBuilder, write_calendar};
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{ConvertArgs, OutputFormat};
use anyhow::Context;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Convert command runner
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Open the newest report (or the explicit input file)
/// 3. Parse rows, surfacing every rejected row
/// 4. Build and write the calendar, only once every step above succeeded
pub fn run_convert(args: ConvertArgs) -> anyhow::Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(&args.verbosity);
    info!("Starting OOO calendar conversion");
    debug!(
        "Input: {:?}, output: {:?}, skip invalid: {}",
        args.input, args.output, args.skip_invalid
    );

    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let spinner = args
        .verbosity
        .show_progress()
        .then(|| create_spinner("Fetching report..."));

    let (report_name, reader) = open_report_stream(&config, &args.source, args.input.as_deref())
        .context("Failed to open time-off report")?;

    if let Some(spinner) = &spinner {
        spinner.set_message(format!("Parsing {}", report_name));
    }

    let result = ReportParser::new(config.parser.clone()).parse_reader(reader);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    for syntax_error in &result.syntax_errors {
        warn!("Unreadable report line {}", syntax_error);
    }

    if !result.record_errors.is_empty() {
        for row_error in &result.record_errors {
            error!("Rejected report row {}", row_error);
        }

        if !args.skip_invalid {
            let first = result.record_errors[0].to_string();
            return Err(Error::RecordsRejected {
                count: result.record_errors.len(),
                first,
            })
            .context(format!(
                "Refusing to write calendar from {}; rerun with --skip-invalid to drop these rows",
                report_name
            ));
        }

        warn!(
            "Dropping {} invalid rows from {}",
            result.record_errors.len(),
            report_name
        );
    }

    let document = CalendarBuilder::new(config.calendar.clone()).build(&result.records);

    let output_bytes = write_calendar(&document, &config.output.path).with_context(|| {
        format!(
            "Failed to write calendar to {}",
            config.output.path.display()
        )
    })?;

    let stats = ConversionStats {
        report: report_name,
        records_parsed: result.stats.records_parsed,
        records_rejected: result.stats.records_failed,
        short_rows_skipped: result.stats.short_rows_skipped,
        syntax_errors: result.stats.syntax_errors,
        events_written: document.len(),
        output_path: Some(config.output.path.clone()),
        output_bytes,
        processing_time: start_time.elapsed(),
    };

    if !args.verbosity.quiet {
        generate_final_report(args.output_format, &stats)?;
    }

    Ok(stats)
}

/// Generate final processing report
fn generate_final_report(format: OutputFormat, stats: &ConversionStats) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }
    }
    Ok(())
}

/// Generate human-readable report
fn generate_human_report(stats: &ConversionStats) {
    println!();
    println!("{}", "OOO calendar written".bright_green().bold());
    println!("  Report:          {}", stats.report.bright_cyan());
    println!("  Records parsed:  {}", stats.records_parsed);
    println!("  Events written:  {}", stats.events_written);

    if let Some(path) = &stats.output_path {
        println!(
            "  Output:          {} ({})",
            path.display(),
            ConversionStats::format_size(stats.output_bytes)
        );
    }
    println!(
        "  Processing time: {}",
        HumanDuration(stats.processing_time)
    );

    if stats.records_rejected > 0 {
        println!(
            "  {}",
            format!("Rows dropped:    {}", stats.records_rejected).yellow()
        );
    }
    if stats.syntax_errors > 0 {
        println!(
            "  {}",
            format!("Unreadable lines: {}", stats.syntax_errors).yellow()
        );
    }
    println!();
}
