//! Error types for opening and decoding RANGS data.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::coord::CoordError;

/// The three data files that make up one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
    /// Cell index (`.cat`)
    Catalog,
    /// Polygon records (`.cel`)
    Polygons,
    /// Shared rim points (`.rim`)
    Rims,
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFile::Catalog => write!(f, "catalog"),
            DataFile::Polygons => write!(f, "polygon"),
            DataFile::Rims => write!(f, "rim"),
        }
    }
}

/// Errors from the map dataset and decoder.
#[derive(Debug, Error)]
pub enum MapError {
    /// A data file for the requested resolution could not be opened.
    ///
    /// The dataset is left with no resolution open.
    #[error("Failed to open {file} file {}: {source}", path.display())]
    FatalOpen {
        file: DataFile,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A seek or read failed while decoding a cell.
    #[error("Failed to read {file} file at offset {offset}: {source}")]
    Read {
        file: DataFile,
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// A value read from disk cannot be valid.
    #[error("Corrupt {file} file at offset {offset}: {reason}")]
    Corrupt {
        file: DataFile,
        offset: u64,
        reason: String,
    },

    /// A decode was requested with no resolution open.
    #[error("No resolution is open")]
    NotOpen,

    /// Resolution level outside 0..=4.
    #[error("Invalid resolution {0} (must be between 0 and 4)")]
    InvalidResolution(u8),

    /// Grid cell outside the catalog.
    #[error(transparent)]
    Coord(#[from] CoordError),
}

impl MapError {
    /// Build a read error for `file` at `offset`.
    pub(crate) fn read(file: DataFile, offset: u64, source: io::Error) -> Self {
        MapError::Read {
            file,
            offset,
            source,
        }
    }

    /// True for errors caused by failed I/O on an open file.
    pub fn is_io(&self) -> bool {
        matches!(self, MapError::FatalOpen { .. } | MapError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display_names_file_and_offset() {
        let err = MapError::read(
            DataFile::Polygons,
            1234,
            io::Error::new(io::ErrorKind::UnexpectedEof, "eof"),
        );
        let msg = err.to_string();
        assert!(msg.contains("polygon"));
        assert!(msg.contains("1234"));
        assert!(err.is_io());
    }

    #[test]
    fn test_fatal_open_display_names_path() {
        let err = MapError::FatalOpen {
            file: DataFile::Rims,
            path: PathBuf::from("/data/gshhs(3).rim"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("rim"));
        assert!(msg.contains("gshhs(3).rim"));
    }

    #[test]
    fn test_error_source_is_io_error() {
        use std::error::Error as _;
        let err = MapError::read(
            DataFile::Catalog,
            0,
            io::Error::new(io::ErrorKind::Other, "boom"),
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_resolution_display() {
        assert_eq!(
            MapError::InvalidResolution(9).to_string(),
            "Invalid resolution 9 (must be between 0 and 4)"
        );
        assert!(!MapError::NotOpen.is_io());
    }

    #[test]
    fn test_error_trait() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<MapError>();
    }
}
