//! Report sinks
//!
//! The reporter renders lines; sinks own delivery. The file sink flushes
//! after every line so a fatal abort never loses already-reported state.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Report delivery errors; fatal to the run.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Report file could not be created
    #[error("failed to create report file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line could not be written or flushed
    #[error("failed to write report line: {0}")]
    Write(#[from] std::io::Error),
}

/// Destination for rendered report lines.
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Writes one UTF-8 record per line, flushed after each write.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SinkError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl ReportSink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        Ok(())
    }
}

/// Mirrors every line to the report file and to stdout, identical content
/// and ordering on both.
#[derive(Debug)]
pub struct DualSink {
    file: FileSink,
}

impl DualSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        Ok(Self {
            file: FileSink::create(path)?,
        })
    }
}

impl ReportSink for DualSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        println!("{line}");
        self.file.write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("Symbol: AAPL").unwrap();
        sink.write_line("Hour 12: VWAP = 100.0000, Volume = 100").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Symbol: AAPL\nHour 12: VWAP = 100.0000, Volume = 100\n"
        );
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let err = FileSink::create("/nonexistent/dir/report.txt").unwrap_err();
        assert!(matches!(err, SinkError::Create { .. }));
    }
}
