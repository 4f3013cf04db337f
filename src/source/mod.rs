//! Byte source
//!
//! Maps the entire input file read-only and exposes it as one addressable
//! byte buffer. The mapping is released exactly once when the source is
//! dropped, on every exit path.

use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Byte source errors; all fatal to the run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Input file could not be mapped into memory
    #[error("failed to map {path}: {source}")]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read-only view of the whole input file.
///
/// `None` backs a zero-length input, which cannot be mapped.
#[derive(Debug)]
pub struct ByteSource {
    map: Option<Mmap>,
}

impl ByteSource {
    /// Open and map the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let len = file
            .metadata()
            .map_err(|source| SourceError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if len == 0 {
            return Ok(Self { map: None });
        }
        // Safety: the map is read-only and private; concurrent truncation of
        // the underlying file is outside this tool's operating contract.
        let map = unsafe {
            Mmap::map(&file).map_err(|source| SourceError::Map {
                path: path.to_path_buf(),
                source,
            })?
        };
        Ok(Self { map: Some(map) })
    }

    /// Total input length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// The full input as one contiguous slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_maps_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello feed").unwrap();
        file.flush().unwrap();

        let source = ByteSource::open(file.path()).unwrap();
        assert_eq!(source.len(), 10);
        assert_eq!(source.as_bytes(), b"hello feed");
    }

    #[test]
    fn test_open_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = ByteSource::open(file.path()).unwrap();
        assert!(source.is_empty());
        assert_eq!(source.as_bytes(), b"");
    }

    #[test]
    fn test_open_missing_file() {
        let err = ByteSource::open("/nonexistent/feed.bin").unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
    }
}
