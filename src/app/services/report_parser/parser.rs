//! Core report parser implementation
//!
//! This module reads a report stream row by row, applies the short-row
//! tolerance and header skipping, and collects records and errors.

use std::io::Read;
use tracing::{debug, info, warn};

use super::line_index::LineIndexedReader;
use super::record_parser::parse_row;
use super::stats::{ParseResult, RowError};
use crate::config::ParserConfig;
use crate::constants::{MIN_ROW_FIELDS, columns, header_labels};
use crate::Error;

/// Parser for Paylocity time-off report streams
///
/// The parser depends only on a readable byte source, so the same code serves
/// local files and remote SFTP file handles.
///
/// Full-width rows carrying the column header labels ("Type" above the leave
/// type, "Status" above the status) are always skipped. With
/// `skip_header_row` set, the first full-width row is skipped whatever it
/// contains.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    /// Create a new parser with the given settings
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a whole report stream
    ///
    /// Output order matches input order. Line numbers are real 1-based lines
    /// of the source, blank lines included. Syntax errors are recorded and
    /// reading continues with the next line; an I/O failure of the stream
    /// ends reading and returns what was accumulated so far.
    pub fn parse_reader<R: Read>(&self, reader: R) -> ParseResult {
        let mut result = ParseResult::default();
        let mut header_pending = self.config.skip_header_row;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(LineIndexedReader::new(reader));

        let mut record = csv::StringRecord::new();
        let mut last_line = 0;
        loop {
            match csv_reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {}
                Err(e) => {
                    let line = e
                        .position()
                        .map_or(last_line + 1, |p| csv_reader.get_ref().line_at(p.byte()));
                    let fatal = matches!(e.kind(), csv::ErrorKind::Io(_));
                    warn!("Skipping line {}: {}", line, e);

                    result.stats.total_rows += 1;
                    result.stats.syntax_errors += 1;
                    result.syntax_errors.push(RowError {
                        line,
                        error: Error::csv(line, e),
                    });

                    if fatal {
                        break;
                    }
                    last_line = line;
                    continue;
                }
            }

            result.stats.total_rows += 1;
            let line = record
                .position()
                .map_or(last_line + 1, |p| csv_reader.get_ref().line_at(p.byte()));
            last_line = line;

            if record.len() < MIN_ROW_FIELDS {
                result.stats.short_rows_skipped += 1;
                continue;
            }

            if header_pending || is_header_row(&record) {
                header_pending = false;
                result.stats.header_rows_skipped += 1;
                debug!("Skipped header row at line {}", line);
                continue;
            }

            let fields: Vec<&str> = record.iter().collect();
            match parse_row(&fields) {
                Ok(leave) => {
                    result.records.push(leave);
                    result.stats.records_parsed += 1;
                }
                Err(error) => {
                    warn!("Rejected row at line {}: {}", line, error);
                    result.stats.records_failed += 1;
                    result.record_errors.push(RowError { line, error });
                }
            }
        }

        info!(
            "Parsed {} leave records from {} rows ({} rejected, {} syntax errors)",
            result.stats.records_parsed,
            result.stats.total_rows,
            result.stats.records_failed,
            result.stats.syntax_errors
        );

        result
    }
}

/// Whether a full-width row is the report's column header
fn is_header_row(record: &csv::StringRecord) -> bool {
    let cell_is = |index: usize, label: &str| {
        record
            .get(index)
            .is_some_and(|cell| cell.trim().eq_ignore_ascii_case(label))
    };
    cell_is(columns::LEAVE_TYPE, header_labels::LEAVE_TYPE)
        && cell_is(columns::STATUS, header_labels::STATUS)
}

/// Parse a report stream with default settings
pub fn parse_all<R: Read>(reader: R) -> ParseResult {
    ReportParser::default().parse_reader(reader)
}
