//! Decoder for the RANGS polygon stream.
//!
//! # Record layout
//!
//! ```text
//! cell     := opcode polygon?          (polygon present iff opcode != 0)
//! polygon  := id:u32 piece* 0x00 child* 0x00
//! child    := opcode(!= 0) polygon
//! piece    := ctl (point{1..6} | rim_descriptor)
//! point    := x:u32 y:u32              (micro-degrees, cell-local)
//! rim_descriptor := address:u32 count:u32   (address = rim offset + 1)
//! ```
//!
//! All words are little-endian. Nested children express interior
//! features: lakes in land, islands in lakes, ponds on islands.

mod piece;
mod polygon;
mod reader;
mod stats;


pub use piece::{Piece, PieceKind, RimDescriptor, MAX_INLINE_POINTS, RIM_PIECE};
pub use stats::DecodeStats;

use tracing::debug;

use crate::cache::DecodeCaches;
use crate::catalog;
use crate::coord::GridCell;
use crate::detail::RenderOptions;
use crate::error::MapError;
use crate::geometry::GeometryBuffer;
use crate::source::{ByteSource, DataFiles};

use polygon::PolygonDecoder;
use reader::CelReader;

/// Decode one cell into `buffer`.
///
/// On error the pass for this cell is abandoned; caches keep only the
/// entries that were read successfully.
pub fn decode_cell<S: ByteSource>(
    files: &mut DataFiles<S>,
    caches: &mut DecodeCaches,
    cell: &GridCell,
    options: &RenderOptions,
    buffer: &mut GeometryBuffer<'_>,
) -> Result<DecodeStats, MapError> {
    let mut stats = DecodeStats {
        cells: 1,
        ..Default::default()
    };
    let start = catalog::resolve(files, caches, cell, &mut stats)?;

    let reader = CelReader::new(files, caches, start.offset);
    let mut decoder = PolygonDecoder::new(reader, buffer, *options, start.x_offset);
    decoder.run()?;

    let mut cell_stats = decoder.reader.stats;
    cell_stats.merge(&stats);
    cell_stats.record_emitted(buffer.counts());

    debug!(
        cell = %cell,
        offset = start.offset,
        polygons = cell_stats.polygons,
        rings = cell_stats.rings,
        lines = cell_stats.lines,
        "Decoded cell"
    );
    Ok(cell_stats)
}
