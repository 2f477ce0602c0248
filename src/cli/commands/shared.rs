//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::report_source::{LocalDirSource, ReportSource, open_latest};
use crate::cli::args::{SourceArgs, VerbosityArgs};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Conversion statistics for reporting
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionStats {
    /// Report the records were read from
    pub report: String,
    /// Leave records parsed successfully
    pub records_parsed: usize,
    /// Rows rejected with a record error
    pub records_rejected: usize,
    /// Short rows skipped (blank separators, title lines)
    pub short_rows_skipped: usize,
    /// Lines rejected by the CSV reader
    pub syntax_errors: usize,
    /// Events written to the calendar
    pub events_written: usize,
    /// Calendar file written, if any
    pub output_path: Option<PathBuf>,
    /// Size of the calendar file in bytes
    pub output_bytes: u64,
    /// Total processing time
    #[serde(serialize_with = "serialize_duration_secs")]
    pub processing_time: Duration,
}

fn serialize_duration_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl ConversionStats {
    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging based on verbosity flags
///
/// `RUST_LOG` takes precedence over the flags when set.
pub fn setup_logging(verbosity: &VerbosityArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = verbosity.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ooo_calendar={}", log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if verbosity.quiet {
        // Minimal logging for quiet mode
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file given, trying default location"),
    }

    Config::load(config_file)
}

/// Build the report source selected by the command line
///
/// A local `--source-dir` wins over the SFTP server.
pub fn create_source(config: &Config, source_args: &SourceArgs) -> Result<Box<dyn ReportSource>> {
    if let Some(dir) = &source_args.source_dir {
        return Ok(Box::new(LocalDirSource::new(dir)?));
    }
    connect_remote(config, source_args)
}

#[cfg(feature = "sftp")]
fn connect_remote(config: &Config, source_args: &SourceArgs) -> Result<Box<dyn ReportSource>> {
    use crate::app::services::report_source::SftpSource;
    use crate::constants::PASSWORD_ENV_VAR;

    let password = source_args.password.as_deref().ok_or_else(|| {
        Error::configuration(format!(
            "No SFTP password given: set {} or pass --password",
            PASSWORD_ENV_VAR
        ))
    })?;
    Ok(Box::new(SftpSource::connect(&config.source, password)?))
}

#[cfg(not(feature = "sftp"))]
fn connect_remote(config: &Config, _source_args: &SourceArgs) -> Result<Box<dyn ReportSource>> {
    Err(Error::configuration(format!(
        "Cannot reach {}: built without SFTP support (enable the `sftp` feature, or use --input/--source-dir)",
        config.source.server
    )))
}

/// Open the report to process: an explicit file, or the newest one in the source
pub fn open_report_stream(
    config: &Config,
    source_args: &SourceArgs,
    input: Option<&Path>,
) -> Result<(String, Box<dyn Read>)> {
    if let Some(path) = input {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("Failed to open report {}", path.display()), e))?;
        return Ok((path.display().to_string(), Box::new(BufReader::new(file))));
    }

    let source = create_source(config, source_args)?;
    open_latest(source.as_ref(), &config.source.report_pattern)
}

/// Create a spinner for an indeterminate step
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
