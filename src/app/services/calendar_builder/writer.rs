//! Calendar output file writing
//!
//! The document is rendered in full, written to a temporary file beside the
//! destination and then renamed over it, so a failed run never leaves a
//! truncated calendar behind.

use super::render::render;
use crate::app::models::calendar::CalendarDocument;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write a rendered calendar to `path`, returning the number of bytes written
pub fn write_calendar(document: &CalendarDocument, path: &Path) -> Result<u64> {
    let content = render(document);
    let path_str = path.display().to_string();

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(Error::output(
            &path_str,
            format!("directory {} does not exist", parent.display()),
        ));
    }

    let mut temp_file = NamedTempFile::new_in(parent)
        .map_err(|e| Error::output(&path_str, format!("cannot create temporary file: {}", e)))?;

    temp_file
        .write_all(content.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|e| Error::output(&path_str, format!("write failed: {}", e)))?;

    temp_file
        .persist(path)
        .map_err(|e| Error::output(&path_str, format!("cannot replace file: {}", e.error)))?;

    let bytes = content.len() as u64;
    info!(
        "Wrote {} events ({} bytes) to {}",
        document.len(),
        bytes,
        path.display()
    );
    Ok(bytes)
}
