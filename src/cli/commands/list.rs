//! List command implementation
//!
//! Shows the reports visible in the configured source and marks the one the
//! convert command would pick.

use super::shared::{create_source, load_configuration, setup_logging};
use crate::app::services::report_source::{has_date_stamp, select_latest};
use crate::cli::args::{ListArgs, OutputFormat};
use anyhow::Context;
use colored::Colorize;
use glob::Pattern;
use serde::Serialize;
use tracing::info;

/// Listing of the reports in a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportListing {
    pub location: String,
    pub pattern: String,
    /// Matching report names, oldest first
    pub reports: Vec<String>,
    /// Report the convert command would process
    pub selected: Option<String>,
}

/// List command runner
pub fn run_list(args: ListArgs) -> anyhow::Result<ReportListing> {
    setup_logging(&args.verbosity);
    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    args.source.apply_to(&mut config);
    config.validate()?;

    let source = create_source(&config, &args.source).context("Failed to reach report source")?;
    let pattern = Pattern::new(&config.source.report_pattern).with_context(|| {
        format!("Invalid report pattern '{}'", config.source.report_pattern)
    })?;

    let names = source.list_reports()?;
    let mut reports: Vec<String> = names
        .iter()
        .filter(|name| pattern.matches(name))
        .cloned()
        .collect();
    reports.sort();

    let listing = ReportListing {
        location: source.location(),
        pattern: config.source.report_pattern.clone(),
        selected: select_latest(&reports, &pattern),
        reports,
    };
    info!(
        "{} of {} entries in {} match {}",
        listing.reports.len(),
        names.len(),
        listing.location,
        listing.pattern
    );

    if !args.verbosity.quiet {
        match args.output_format {
            OutputFormat::Human => print_human(&listing),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        }
    }

    Ok(listing)
}

fn print_human(listing: &ReportListing) {
    println!(
        "{} {} ({})",
        "Reports in".bold(),
        listing.location.bright_cyan(),
        listing.pattern
    );

    if listing.reports.is_empty() {
        println!("  {}", "No matching reports".yellow());
        return;
    }

    for name in &listing.reports {
        let marker = if listing.selected.as_deref() == Some(name.as_str()) {
            "*".bright_green().bold().to_string()
        } else {
            " ".to_string()
        };
        let note = if has_date_stamp(name) {
            String::new()
        } else {
            " (no date stamp)".yellow().to_string()
        };
        println!("  {} {}{}", marker, name, note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{SourceArgs, VerbosityArgs};
    use tempfile::TempDir;

    #[test]
    fn test_list_marks_newest_report() {
        let temp_dir = TempDir::new().unwrap();
        for name in [
            "Time_Off_Requests_20211026.csv",
            "Time_Off_Requests_20211012.csv",
            "notes.txt",
        ] {
            std::fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let args = ListArgs {
            source: SourceArgs {
                source_dir: Some(temp_dir.path().to_path_buf()),
                ..SourceArgs::default()
            },
            verbosity: VerbosityArgs {
                verbose: 0,
                quiet: true,
            },
            ..ListArgs::default()
        };

        let listing = run_list(args).unwrap();

        assert_eq!(
            listing.reports,
            vec![
                "Time_Off_Requests_20211012.csv".to_string(),
                "Time_Off_Requests_20211026.csv".to_string()
            ]
        );
        assert_eq!(
            listing.selected.as_deref(),
            Some("Time_Off_Requests_20211026.csv")
        );
    }
}
