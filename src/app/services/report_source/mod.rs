//! Report sources
//!
//! A report source lists the time-off reports available in one directory and
//! opens any of them as a plain byte stream. The parser only ever sees that
//! stream, so local directories and remote SFTP directories are
//! interchangeable.
//!
//! Report filenames embed a sortable date (`Time_Off_Requests_20211012.csv`),
//! so the newest report is the lexicographically last matching name.

pub mod local;
#[cfg(feature = "sftp")]
pub mod sftp;

pub use local::LocalDirSource;
#[cfg(feature = "sftp")]
pub use sftp::SftpSource;

use crate::{Error, Result};
use glob::Pattern;
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;
use tracing::{info, warn};

/// A directory of report files that can be listed and read sequentially
pub trait ReportSource {
    /// Human-readable description of where reports come from
    fn location(&self) -> String;

    /// Names of the entries in the report directory, in no particular order
    fn list_reports(&self) -> Result<Vec<String>>;

    /// Open one report for reading
    fn open_report(&self, name: &str) -> Result<Box<dyn Read>>;
}

fn date_stamp_regex() -> &'static Regex {
    static DATE_STAMP: OnceLock<Regex> = OnceLock::new();
    DATE_STAMP.get_or_init(|| Regex::new(r"(?:^|\D)\d{8}(?:\D|$)").expect("valid regex"))
}

/// Whether a filename carries an eight-digit date stamp such as 20211012
pub fn has_date_stamp(name: &str) -> bool {
    date_stamp_regex().is_match(name)
}

/// Pick the lexicographically last name matching `pattern`
///
/// Ordering by name equals ordering by date only while every report name
/// uses the same zero-padded YYYYMMDD stamp; a chosen name without a stamp is
/// logged as a warning.
pub fn select_latest<S: AsRef<str>>(names: &[S], pattern: &Pattern) -> Option<String> {
    let latest = names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| pattern.matches(name))
        .max()?;

    if !has_date_stamp(latest) {
        warn!(
            "Selected report '{}' has no YYYYMMDD date stamp; newest-by-name may not be newest-by-date",
            latest
        );
    }

    Some(latest.to_string())
}

/// Locate and open the newest report in a source
pub fn open_latest(source: &dyn ReportSource, pattern: &str) -> Result<(String, Box<dyn Read>)> {
    let glob = Pattern::new(pattern).map_err(|e| {
        Error::configuration(format!("Invalid report pattern '{}': {}", pattern, e))
    })?;

    let names = source.list_reports()?;
    let latest = select_latest(&names, &glob)
        .ok_or_else(|| Error::no_report_found(source.location(), pattern))?;

    info!(
        "Selected report {} from {} ({} entries listed)",
        latest,
        source.location(),
        names.len()
    );
    let reader = source.open_report(&latest)?;
    Ok((latest, reader))
}
