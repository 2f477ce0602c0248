//! Command-line argument definitions for the OOO calendar converter
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Every flag that has a config file counterpart is optional here, so that
//! unset flags fall through to the config file and then to built-in defaults.

use crate::config::Config;
use crate::constants::PASSWORD_ENV_VAR;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the OOO calendar converter
///
/// Converts the newest Paylocity time-off report into an iCalendar file of
/// all-day out-of-office events.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ooo-calendar",
    version,
    about = "Convert Paylocity time-off reports into iCalendar out-of-office events",
    long_about = "Fetches the newest Paylocity time-off report over SFTP (or from a local \
                  file or directory), parses each leave request, and writes an iCalendar file \
                  with one all-day event per request for import into calendar tools."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert the newest report into an iCalendar file (main command)
    Convert(ConvertArgs),
    /// Parse a report and print its records and errors without writing a calendar
    Inspect(InspectArgs),
    /// List the reports available in the source and show which one is newest
    List(ListArgs),
}

/// Where to read reports from
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// SFTP server address
    #[arg(long = "server", value_name = "HOST")]
    pub server: Option<String>,

    /// SFTP account name
    #[arg(short = 'u', long = "username", value_name = "USER")]
    pub username: Option<String>,

    /// SFTP password
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        env = PASSWORD_ENV_VAR,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Directory on the SFTP server holding the reports
    #[arg(long = "remote-dir", value_name = "DIR")]
    pub remote_dir: Option<String>,

    /// Read reports from a local directory instead of the SFTP server
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Glob used to pick report files from the directory listing
    #[arg(long = "pattern", value_name = "GLOB")]
    pub report_pattern: Option<String>,
}

/// Logging verbosity flags shared by every command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerbosityArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl VerbosityArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone, Default, Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Convert this report file instead of fetching the newest one
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "source_dir"
    )]
    pub input: Option<PathBuf>,

    /// Output path for the generated calendar
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Drop rows with unrecognized labels or bad dates instead of failing
    ///
    /// Every dropped row is still logged and counted in the summary.
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,

    /// Skip the first full-width row even when it lacks the column header labels
    #[arg(long = "skip-header")]
    pub skip_header: bool,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,

    /// Output format for the run summary
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Default, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Inspect this report file instead of the newest one
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "source_dir"
    )]
    pub input: Option<PathBuf>,

    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Skip the first full-width row even when it lacks the column header labels
    #[arg(long = "skip-header")]
    pub skip_header: bool,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,

    /// Output format for the record listing
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the list command
#[derive(Debug, Clone, Default, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,

    /// Output format for the listing
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl SourceArgs {
    /// Apply source overrides to a configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.source.server = server.clone();
        }
        if let Some(username) = &self.username {
            config.source.username = username.clone();
        }
        if let Some(remote_dir) = &self.remote_dir {
            config.source.remote_dir = remote_dir.clone();
        }
        if let Some(pattern) = &self.report_pattern {
            config.source.report_pattern = pattern.clone();
        }
    }

    /// Validate the source arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(source_dir) = &self.source_dir {
            if !source_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Source directory does not exist: {}",
                    source_dir.display()
                )));
            }
        }
        Ok(())
    }
}

/// Check an optional explicit config file path
fn validate_config_file(config_file: &Option<PathBuf>) -> Result<()> {
    if let Some(config_file) = config_file {
        if !config_file.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }
    }
    Ok(())
}

/// Check an optional explicit report file path
fn validate_input_file(input: &Option<PathBuf>) -> Result<()> {
    if let Some(input) = input {
        if !input.is_file() {
            return Err(Error::configuration(format!(
                "Input report does not exist: {}",
                input.display()
            )));
        }
    }
    Ok(())
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        validate_input_file(&self.input)?;
        validate_config_file(&self.config_file)?;

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is a directory: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply CLI argument overrides to a configuration
    pub fn apply_to(&self, config: &mut Config) {
        self.source.apply_to(config);
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.skip_header {
            config.parser.skip_header_row = true;
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        validate_input_file(&self.input)?;
        validate_config_file(&self.config_file)
    }

    /// Apply CLI argument overrides to a configuration
    pub fn apply_to(&self, config: &mut Config) {
        self.source.apply_to(config);
        if self.skip_header {
            config.parser.skip_header_row = true;
        }
    }
}

impl ListArgs {
    /// Validate the list command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        validate_config_file(&self.config_file)
    }
}
