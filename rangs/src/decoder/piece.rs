//! Piece control bytes and rim descriptors.

use crate::codec::RawPoint;

/// Point count marking a rim descriptor instead of inline points.
pub const RIM_PIECE: u8 = 7;

/// Largest inline segment length.
pub const MAX_INLINE_POINTS: u8 = 6;

/// What follows a piece control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// End of the piece list for this polygon
    End,
    /// This many points follow inline
    Inline(u8),
    /// An 8-byte rim descriptor follows
    Rim,
}

/// A decoded piece control byte.
///
/// The low three bits hold the point count, the high four bits the
/// level-of-detail class `flg`. Bit 3 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub n_points: u8,
    pub flg: u8,
}

impl Piece {
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        Self {
            n_points: byte & 0x07,
            flg: byte >> 4,
        }
    }

    pub fn kind(&self) -> PieceKind {
        match self.n_points {
            0 => PieceKind::End,
            RIM_PIECE => PieceKind::Rim,
            n => PieceKind::Inline(n),
        }
    }
}

/// Reference to a run of shared points in the rim file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RimDescriptor {
    /// Rim file offset plus one
    pub address: u32,
    /// Number of points in the run
    pub count: u32,
}

impl RimDescriptor {
    /// Zero-based rim file offset, or `None` for the invalid address 0.
    pub fn offset(&self) -> Option<u64> {
        self.address.checked_sub(1).map(u64::from)
    }
}

impl From<RawPoint> for RimDescriptor {
    fn from(raw: RawPoint) -> Self {
        Self {
            address: raw.x,
            count: raw.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_split() {
        let piece = Piece::from_byte(0x13);
        assert_eq!(piece.n_points, 3);
        assert_eq!(piece.flg, 1);
        assert_eq!(piece.kind(), PieceKind::Inline(3));
    }

    #[test]
    fn test_piece_ignores_bit_three() {
        let piece = Piece::from_byte(0x2A);
        assert_eq!(piece.n_points, 2);
        assert_eq!(piece.flg, 2);
    }

    #[test]
    fn test_piece_kinds() {
        assert_eq!(Piece::from_byte(0x00).kind(), PieceKind::End);
        assert_eq!(Piece::from_byte(0xF0).kind(), PieceKind::End);
        assert_eq!(Piece::from_byte(0x17).kind(), PieceKind::Rim);
        assert_eq!(
            Piece::from_byte(0x06).kind(),
            PieceKind::Inline(MAX_INLINE_POINTS)
        );
    }

    #[test]
    fn test_rim_descriptor_offset() {
        let descriptor = RimDescriptor::from(RawPoint::new(9, 4));
        assert_eq!(descriptor.offset(), Some(8));
        assert_eq!(descriptor.count, 4);
        assert_eq!(RimDescriptor::from(RawPoint::new(0, 1)).offset(), None);
    }
}
