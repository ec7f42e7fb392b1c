//! Walks the nested polygon records of one cell.

use tracing::trace;

use crate::codec::RawPoint;
use crate::detail::RenderOptions;
use crate::error::{DataFile, MapError};
use crate::geometry::{GeometryBuffer, Layer};
use crate::source::ByteSource;

use super::piece::{Piece, PieceKind, RimDescriptor};
use super::reader::CelReader;

/// One open nesting level on the work stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    level: usize,
    polygon_id: u32,
}

/// Decodes the record tree of a cell into a [`GeometryBuffer`].
///
/// A cell holds one top-level polygon. After its pieces, each polygon is
/// followed by a list of children (lake in land, island in lake, ...), each
/// introduced by a nonzero opcode byte and terminated by a zero byte.
/// Nesting is walked with an explicit stack rather than recursion, since
/// the format puts no bound on depth.
pub(crate) struct PolygonDecoder<'r, 'g, 'b, S> {
    pub(crate) reader: CelReader<'r, S>,
    buffer: &'g mut GeometryBuffer<'b>,
    options: RenderOptions,
    x_offset: i32,
}

impl<'r, 'g, 'b, S: ByteSource> PolygonDecoder<'r, 'g, 'b, S> {
    pub(crate) fn new(
        reader: CelReader<'r, S>,
        buffer: &'g mut GeometryBuffer<'b>,
        options: RenderOptions,
        x_offset: i32,
    ) -> Self {
        Self {
            reader,
            buffer,
            options,
            x_offset,
        }
    }

    /// Decode everything from the reader's cursor: the cell opcode, the
    /// top-level polygon and all of its descendants.
    pub(crate) fn run(&mut self) -> Result<(), MapError> {
        if self.reader.read_byte()? == 0 {
            return Ok(());
        }

        let root = self.decode_polygon(0)?;
        let mut stack = vec![Frame {
            level: 0,
            polygon_id: root,
        }];

        while let Some(parent) = stack.last().copied() {
            if self.reader.read_byte()? == 0 {
                self.buffer.flush_empty();
                stack.pop();
                continue;
            }

            let level = parent.level + 1;
            trace!(
                parent_id = parent.polygon_id as i32,
                level,
                "Descending into child polygon"
            );
            let polygon_id = self.decode_polygon(level)?;
            stack.push(Frame { level, polygon_id });
        }

        Ok(())
    }

    /// Decode one polygon's ID and piece list, closing its open shapes.
    ///
    /// Returns the polygon ID. Children are left for the caller.
    pub(crate) fn decode_polygon(&mut self, level: usize) -> Result<u32, MapError> {
        self.buffer.begin_polygon();

        let polygon_id = self.reader.read_word()?;
        self.reader.stats.polygons += 1;
        self.reader.stats.max_depth = self.reader.stats.max_depth.max(level);
        trace!(polygon_id = polygon_id as i32, level, "Decoding polygon");

        loop {
            let piece = Piece::from_byte(self.reader.read_byte()?);
            match piece.kind() {
                PieceKind::End => break,
                PieceKind::Inline(n_points) => self.inline_segment(polygon_id, piece.flg, n_points)?,
                PieceKind::Rim => self.rim_segment(piece.flg)?,
            }
        }

        self.buffer.close_shape(Layer::Fill);
        self.buffer.close_shape(Layer::Shore);
        Ok(polygon_id)
    }

    /// Points stored inline in the polygon stream.
    ///
    /// Inline runs trace cell edges, which adjacent polygons share. Unless
    /// every boundary point is requested, only the first point of the run
    /// extends the shore line and the last one ends it.
    fn inline_segment(&mut self, polygon_id: u32, flg: u8, n_points: u8) -> Result<(), MapError> {
        let fill = self.options.detail.fills(flg);
        let shore = self.options.detail.outlines(flg);

        for i in 1..=n_points {
            let point = self.reader.read_pair()?;
            let (lon, lat) = self.position(&point);

            if fill {
                self.buffer.add_point(Layer::Fill, lon, lat, flg);
            }
            if !shore {
                continue;
            }
            if self.options.emit_all_boundary_points {
                self.buffer.add_point(Layer::Shore, lon, lat, flg);
            } else if polygon_id as i32 >= 0 {
                if i == 1 {
                    self.buffer.add_point(Layer::Shore, lon, lat, flg);
                } else if i == n_points {
                    self.buffer.restart(Layer::Shore, lon, lat);
                }
            }
        }
        Ok(())
    }

    /// A shared run of coastline points in the rim file.
    fn rim_segment(&mut self, flg: u8) -> Result<(), MapError> {
        let descriptor_offset = self.reader.cursor();
        let descriptor = RimDescriptor::from(self.reader.read_pair()?);
        if descriptor.count == 0 {
            return Ok(());
        }

        let rim_offset = descriptor.offset().ok_or_else(|| MapError::Corrupt {
            file: DataFile::Polygons,
            offset: descriptor_offset,
            reason: "rim descriptor has address 0".to_string(),
        })?;
        let points = self.reader.read_rim(rim_offset, descriptor.count)?;
        self.reader.stats.rim_segments += 1;

        let fill = self.options.detail.fills(flg);
        let shore = self.options.detail.outlines(flg);
        for point in points.iter() {
            let (lon, lat) = self.position(point);
            if fill {
                self.buffer.add_point(Layer::Fill, lon, lat, flg);
            }
            if shore {
                self.buffer.add_point(Layer::Shore, lon, lat, flg);
            }
        }
        Ok(())
    }

    #[inline]
    fn position(&self, point: &RawPoint) -> (f64, f64) {
        (point.lon(self.x_offset), point.lat())
    }
}
