//! Cache-aware reads from the polygon and rim streams.

use std::sync::Arc;

use crate::cache::DecodeCaches;
use crate::codec::{decode_points, decode_u32_le, RawPoint, POINT_SIZE, WORD_SIZE};
use crate::error::{DataFile, MapError};
use crate::source::{ByteSource, DataFiles};

use super::DecodeStats;

/// Cursor over the polygon stream of one cell.
///
/// Every read advances the cursor by the size of the value, whether it was
/// served from cache or from the file, and is cached under the cursor
/// value it started at. Values are only cached after a successful read.
pub(crate) struct CelReader<'a, S> {
    files: &'a mut DataFiles<S>,
    caches: &'a mut DecodeCaches,
    cursor: u64,
    pub(crate) stats: DecodeStats,
}

impl<'a, S: ByteSource> CelReader<'a, S> {
    pub(crate) fn new(files: &'a mut DataFiles<S>, caches: &'a mut DecodeCaches, start: u64) -> Self {
        Self {
            files,
            caches,
            cursor: start,
            stats: DecodeStats::default(),
        }
    }

    /// Current position in the polygon stream.
    pub(crate) fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Read a single piece or opcode byte.
    pub(crate) fn read_byte(&mut self) -> Result<u8, MapError> {
        let offset = self.cursor;
        let value = match self.caches.opcodes.get(&offset) {
            Some(&cached) => {
                self.stats.cache_hits += 1;
                cached
            }
            None => {
                let mut buf = [0u8; 1];
                self.read_file(DataFile::Polygons, offset, &mut buf)?;
                let value = u32::from(buf[0]);
                self.caches.opcodes.put(offset, value);
                value
            }
        };
        self.cursor += 1;
        Ok((value & 0xFF) as u8)
    }

    /// Read a 4-byte word (polygon ID). Shares the opcode cache.
    pub(crate) fn read_word(&mut self) -> Result<u32, MapError> {
        let offset = self.cursor;
        let value = match self.caches.opcodes.get(&offset) {
            Some(&cached) => {
                self.stats.cache_hits += 1;
                cached
            }
            None => {
                let mut buf = [0u8; 4];
                self.read_file(DataFile::Polygons, offset, &mut buf)?;
                let value = decode_u32_le(buf);
                self.caches.opcodes.put(offset, value);
                value
            }
        };
        self.cursor += WORD_SIZE;
        Ok(value)
    }

    /// Read an 8-byte pair: a point or a rim descriptor.
    pub(crate) fn read_pair(&mut self) -> Result<RawPoint, MapError> {
        let offset = self.cursor;
        let value = match self.caches.coordinates.get(&offset) {
            Some(&cached) => {
                self.stats.cache_hits += 1;
                cached
            }
            None => {
                let mut buf = [0u8; 8];
                self.read_file(DataFile::Polygons, offset, &mut buf)?;
                let value = RawPoint::from_bytes(buf);
                self.caches.coordinates.put(offset, value);
                value
            }
        };
        self.cursor += POINT_SIZE;
        Ok(value)
    }

    /// Fetch `count` points starting at `rim_offset` in the rim file.
    ///
    /// The whole run is cached under its offset, so every polygon sharing
    /// it reads the file once.
    pub(crate) fn read_rim(&mut self, rim_offset: u64, count: u32) -> Result<Arc<[RawPoint]>, MapError> {
        if let Some(points) = self.caches.rims.get(&rim_offset) {
            self.stats.cache_hits += 1;
            return Ok(Arc::clone(points));
        }

        // `count` is untrusted; the buffer only grows with bytes read.
        let len = u64::from(count) * POINT_SIZE;
        let buf = self.files.read_vec_at(DataFile::Rims, rim_offset, len)?;
        self.stats.cache_misses += 1;
        self.stats.bytes_read += len;

        let points: Arc<[RawPoint]> = Arc::from(decode_points(&buf));
        self.caches.rims.put(rim_offset, Arc::clone(&points));
        Ok(points)
    }

    fn read_file(&mut self, file: DataFile, offset: u64, buf: &mut [u8]) -> Result<(), MapError> {
        self.files.read_at(file, offset, buf)?;
        self.stats.cache_misses += 1;
        self.stats.bytes_read += buf.len() as u64;
        Ok(())
    }
}
