//! Random-access byte sources and the per-resolution data files.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{DataFile, MapError};

/// Random access to a read-only byte stream.
///
/// Implemented for every `Read + Seek` type, so `File` and
/// `io::Cursor<Vec<u8>>` work directly.
pub trait ByteSource {
    /// Fill `buf` with the bytes starting at `offset`.
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()>;

    /// Read exactly `len` bytes starting at `offset` into a new buffer.
    ///
    /// The buffer grows with the bytes actually read, so a length taken
    /// from a damaged file cannot force a huge allocation. Fails with
    /// `UnexpectedEof` if the source ends first.
    fn read_vec_at(&mut self, offset: u64, len: u64) -> io::Result<Vec<u8>>;
}

impl<T: Read + Seek> ByteSource for T {
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        self.read_exact(buf)
    }

    fn read_vec_at(&mut self, offset: u64, len: u64) -> io::Result<Vec<u8>> {
        self.seek(SeekFrom::Start(offset))?;
        let mut buf = Vec::new();
        self.by_ref().take(len).read_to_end(&mut buf)?;
        if (buf.len() as u64) < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, found {}", len, buf.len()),
            ));
        }
        Ok(buf)
    }
}

/// Map resolution level. 0 is the finest, 4 the coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(u8);

impl Resolution {
    /// Finest level.
    pub const FINEST: Resolution = Resolution(0);
    /// Coarsest level.
    pub const COARSEST: Resolution = Resolution(4);

    /// Create a resolution, rejecting levels above 4.
    pub fn new(level: u8) -> Result<Self, MapError> {
        if level > Self::COARSEST.0 {
            return Err(MapError::InvalidResolution(level));
        }
        Ok(Self(level))
    }

    /// The numeric level.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution(3)
    }
}

impl TryFrom<u8> for Resolution {
    type Error = MapError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Open handles for the three files of one resolution.
#[derive(Debug)]
pub struct DataFiles<S> {
    pub catalog: S,
    pub polygons: S,
    pub rims: S,
}

impl<S: ByteSource> DataFiles<S> {
    /// The handle for `file`.
    pub fn get_mut(&mut self, file: DataFile) -> &mut S {
        match file {
            DataFile::Catalog => &mut self.catalog,
            DataFile::Polygons => &mut self.polygons,
            DataFile::Rims => &mut self.rims,
        }
    }

    /// Read `buf.len()` bytes of `file` at `offset`, tagging failures.
    pub fn read_at(&mut self, file: DataFile, offset: u64, buf: &mut [u8]) -> Result<(), MapError> {
        self.get_mut(file)
            .read_exact_at(offset, buf)
            .map_err(|e| MapError::read(file, offset, e))
    }

    /// Read `len` bytes of `file` at `offset` into a new buffer.
    pub fn read_vec_at(&mut self, file: DataFile, offset: u64, len: u64) -> Result<Vec<u8>, MapError> {
        self.get_mut(file)
            .read_vec_at(offset, len)
            .map_err(|e| MapError::read(file, offset, e))
    }
}

/// Opens the data files of a resolution.
///
/// The naming of data files is a deployment concern; [`DataDirectory`]
/// provides the conventional RANGS layout.
pub trait DataOpener {
    /// Handle type for an open file.
    type Source: ByteSource;

    /// Open all three files for `resolution`.
    ///
    /// Fails with [`MapError::FatalOpen`] if any of them cannot be opened.
    fn open(&self, resolution: Resolution) -> Result<DataFiles<Self::Source>, MapError>;
}

/// A directory holding RANGS data files with their conventional names:
/// `rangs(N).cat`, `rangs(N).cel` and `gshhs(N).rim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Use the files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `file` for `resolution`.
    pub fn path_for(&self, file: DataFile, resolution: Resolution) -> PathBuf {
        let name = match file {
            DataFile::Catalog => format!("rangs({}).cat", resolution),
            DataFile::Polygons => format!("rangs({}).cel", resolution),
            DataFile::Rims => format!("gshhs({}).rim", resolution),
        };
        self.root.join(name)
    }

    fn open_file(&self, file: DataFile, resolution: Resolution) -> Result<File, MapError> {
        let path = self.path_for(file, resolution);
        File::open(&path).map_err(|source| MapError::FatalOpen { file, path, source })
    }
}

impl DataOpener for DataDirectory {
    type Source = File;

    fn open(&self, resolution: Resolution) -> Result<DataFiles<File>, MapError> {
        Ok(DataFiles {
            polygons: self.open_file(DataFile::Polygons, resolution)?,
            catalog: self.open_file(DataFile::Catalog, resolution)?,
            rims: self.open_file(DataFile::Rims, resolution)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cursor_read_exact_at() {
        let mut source = Cursor::new(vec![0u8, 1, 2, 3, 4, 5]);
        let mut buf = [0u8; 2];
        source.read_exact_at(3, &mut buf).unwrap();
        assert_eq!(buf, [3, 4]);
        source.read_exact_at(0, &mut buf).unwrap();
        assert_eq!(buf, [0, 1]);
    }

    #[test]
    fn test_read_past_end_fails() {
        let mut source = Cursor::new(vec![0u8; 4]);
        let mut buf = [0u8; 4];
        assert!(source.read_exact_at(2, &mut buf).is_err());
    }

    #[test]
    fn test_read_vec_at() {
        let mut source = Cursor::new(vec![0u8, 1, 2, 3, 4, 5]);
        assert_eq!(source.read_vec_at(2, 3).unwrap(), vec![2, 3, 4]);
        assert!(source.read_vec_at(4, 0).unwrap().is_empty());
    }

    #[test]
    fn test_read_vec_at_huge_length_fails_with_eof() {
        let mut source = Cursor::new(vec![0u8; 8]);
        let err = source.read_vec_at(0, u64::from(u32::MAX) * 8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_data_files_read_at_tags_error() {
        let mut files = DataFiles {
            catalog: Cursor::new(vec![0u8; 4]),
            polygons: Cursor::new(Vec::new()),
            rims: Cursor::new(Vec::new()),
        };
        let mut buf = [0u8; 1];
        let err = files.read_at(DataFile::Polygons, 17, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            MapError::Read {
                file: DataFile::Polygons,
                offset: 17,
                ..
            }
        ));
    }

    #[test]
    fn test_resolution_range() {
        assert_eq!(Resolution::new(0).unwrap(), Resolution::FINEST);
        assert_eq!(Resolution::new(4).unwrap(), Resolution::COARSEST);
        assert!(matches!(
            Resolution::try_from(5),
            Err(MapError::InvalidResolution(5))
        ));
        assert_eq!(Resolution::default().level(), 3);
    }

    #[test]
    fn test_data_directory_names() {
        let dir = DataDirectory::new("/maps");
        let res = Resolution::new(2).unwrap();
        assert_eq!(
            dir.path_for(DataFile::Catalog, res),
            PathBuf::from("/maps/rangs(2).cat")
        );
        assert_eq!(
            dir.path_for(DataFile::Polygons, res),
            PathBuf::from("/maps/rangs(2).cel")
        );
        assert_eq!(
            dir.path_for(DataFile::Rims, res),
            PathBuf::from("/maps/gshhs(2).rim")
        );
    }

    #[test]
    fn test_open_missing_directory_is_fatal() {
        let dir = DataDirectory::new("/nonexistent/rangs-data");
        let err = dir.open(Resolution::default()).unwrap_err();
        assert!(matches!(err, MapError::FatalOpen { .. }));
    }
}
