//! Configuration management and validation.
//!
//! Provides configuration structures for the report source, the row parser,
//! calendar generation, and output. Values are layered: built-in defaults,
//! then an optional YAML config file, then command-line overrides.

use crate::app::models::LeaveStatus;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_OUTPUT_PATH, DEFAULT_PORT, DEFAULT_REMOTE_DIR,
    DEFAULT_REPORT_PATTERN, DEFAULT_SERVER, DEFAULT_SUMMARY_SUFFIX, DEFAULT_USERNAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where to find time-off reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// SFTP host
    pub server: String,

    /// SFTP port
    pub port: u16,

    /// SFTP account name
    pub username: String,

    /// Directory on the server holding the reports
    pub remote_dir: String,

    /// Glob applied to listed filenames before picking the newest
    pub report_pattern: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            remote_dir: DEFAULT_REMOTE_DIR.to_string(),
            report_pattern: DEFAULT_REPORT_PATTERN.to_string(),
        }
    }
}

/// Row parser settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Skip the first full-width row even when it lacks the header labels
    pub skip_header_row: bool,
}

/// Calendar generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Appended to the employee name to form the event summary
    pub summary_suffix: String,

    /// Records with these statuses produce no event
    pub skip_statuses: Vec<LeaveStatus>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            summary_suffix: DEFAULT_SUMMARY_SUFFIX.to_string(),
            skip_statuses: Vec::new(),
        }
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination of the rendered calendar
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub parser: ParserConfig,
    pub calendar: CalendarConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Default config file location, `<config dir>/ooo-calendar/config.yaml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a YAML file, filling missing keys with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit file, else from the default location if it exists, else defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.server.trim().is_empty() {
            return Err(Error::configuration("Server address cannot be empty"));
        }

        if self.source.port == 0 {
            return Err(Error::configuration("Port must be greater than 0"));
        }

        if self.source.username.trim().is_empty() {
            return Err(Error::configuration("Username cannot be empty"));
        }

        glob::Pattern::new(&self.source.report_pattern).map_err(|e| {
            Error::configuration(format!(
                "Invalid report pattern '{}': {}",
                self.source.report_pattern, e
            ))
        })?;

        if self.output.path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }

        Ok(())
    }

    /// Set the SFTP server
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.source.server = server.into();
        self
    }

    /// Set the SFTP account name
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.source.username = username.into();
        self
    }

    /// Set the output file path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.path = path.into();
        self
    }

    /// Skip the report's column header row
    pub fn with_header_row_skipped(mut self) -> Self {
        self.parser.skip_header_row = true;
        self
    }
}
