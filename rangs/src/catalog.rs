//! Maps a grid cell to the start of its records in the polygon stream.

use crate::cache::DecodeCaches;
use crate::codec::decode_u32_le;
use crate::coord::GridCell;
use crate::decoder::DecodeStats;
use crate::error::{DataFile, MapError};
use crate::source::{ByteSource, DataFiles};

/// Where a cell's records begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStart {
    /// Byte offset of the cell's first opcode in the polygon stream
    pub offset: u64,
    /// 360° multiple added to decoded longitudes
    pub x_offset: i32,
}

/// Look up the polygon stream offset for `cell`.
///
/// The catalog stores `offset + 1` as a little-endian word at
/// `4 * ((89 - lat) * 360 + lon)`. Results are cached by that index.
pub fn resolve<S: ByteSource>(
    files: &mut DataFiles<S>,
    caches: &mut DecodeCaches,
    cell: &GridCell,
    stats: &mut DecodeStats,
) -> Result<CellStart, MapError> {
    let index = cell.catalog_index();

    let offset = match caches.catalog.get(&index) {
        Some(&offset) => {
            stats.cache_hits += 1;
            offset
        }
        None => {
            let mut buf = [0u8; 4];
            files.read_at(DataFile::Catalog, index, &mut buf)?;
            stats.cache_misses += 1;
            stats.bytes_read += 4;

            let entry = decode_u32_le(buf);
            let offset = entry.checked_sub(1).map(u64::from).ok_or_else(|| MapError::Corrupt {
                file: DataFile::Catalog,
                offset: index,
                reason: format!("cell {} has a zero catalog entry", cell),
            })?;
            caches.catalog.put(index, offset);
            offset
        }
    };

    Ok(CellStart {
        offset,
        x_offset: cell.x_offset,
    })
}
