//! Local directory report source

use super::ReportSource;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use tracing::debug;

/// Reports stored in a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDirSource {
    dir: PathBuf,
}

impl LocalDirSource {
    /// Create a source over an existing directory
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::configuration(format!(
                "Report directory does not exist: {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }
}

impl ReportSource for LocalDirSource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_reports(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            Error::io(format!("Failed to read directory {}", self.dir.display()), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("Failed to read directory entry", e))?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!("Ignoring non UTF-8 filename {:?}", name),
            }
        }

        debug!("Listed {} files in {}", names.len(), self.dir.display());
        Ok(names)
    }

    fn open_report(&self, name: &str) -> Result<Box<dyn Read>> {
        let path = self.dir.join(name);
        let file = File::open(&path)
            .map_err(|e| Error::io(format!("Failed to open report {}", path.display()), e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::report_source::open_latest;
    use tempfile::TempDir;

    #[test]
    fn test_lists_files_only() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Time_Off_Requests_20211012.csv"), "x").unwrap();
        std::fs::create_dir(temp_dir.path().join("archive.csv")).unwrap();

        let source = LocalDirSource::new(temp_dir.path()).unwrap();
        let names = source.list_reports().unwrap();
        assert_eq!(names, vec!["Time_Off_Requests_20211012.csv".to_string()]);
    }

    #[test]
    fn test_open_latest_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Time_Off_Requests_20211012.csv"), "old").unwrap();
        std::fs::write(temp_dir.path().join("Time_Off_Requests_20211019.csv"), "new").unwrap();

        let source = LocalDirSource::new(temp_dir.path()).unwrap();
        let (name, mut reader) = open_latest(&source, "*.csv").unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(name, "Time_Off_Requests_20211019.csv");
        assert_eq!(contents, "new");
    }

    #[test]
    fn test_missing_directory_rejected() {
        assert!(LocalDirSource::new("/nonexistent/reports").is_err());
    }

    #[test]
    fn test_open_missing_report() {
        let temp_dir = TempDir::new().unwrap();
        let source = LocalDirSource::new(temp_dir.path()).unwrap();
        assert!(matches!(
            source.open_report("missing.csv"),
            Err(Error::Io { .. })
        ));
    }
}
