//! Binary primitives for the RANGS file formats.
//!
//! Every multi-byte value in the catalog, cel and rim files is a 4-byte
//! little-endian word. Coordinates are fixed-point with a unit of one
//! micro-degree.

/// Size of one encoded word in bytes.
pub const WORD_SIZE: u64 = 4;

/// Size of one encoded point (two words) in bytes.
pub const POINT_SIZE: u64 = 8;

/// Degrees per fixed-point coordinate unit.
pub const COORDINATE_SCALE: f64 = 0.000_001;

/// Decode a little-endian unsigned 32-bit word.
///
/// Byte 0 is the least significant. Used for file offsets, point counts,
/// polygon IDs and raw coordinate magnitudes alike.
#[inline]
pub fn decode_u32_le(bytes: [u8; 4]) -> u32 {
    u32::from(bytes[0])
        | u32::from(bytes[1]) << 8
        | u32::from(bytes[2]) << 16
        | u32::from(bytes[3]) << 24
}

/// Convert a raw fixed-point coordinate to degrees.
///
/// The raw value is treated as an unsigned magnitude; there is no signed
/// reinterpretation of words with the top bit set.
#[inline]
pub fn scale_coordinate(raw: u32) -> f64 {
    f64::from(raw) * COORDINATE_SCALE
}

/// A pair of raw words as stored on disk.
///
/// Usually a point in cell-local fixed-point coordinates. Rim descriptors
/// share the same 8-byte layout (address, count) and the same cache, so
/// they are carried in this type too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawPoint {
    /// Longitude word (or rim address for descriptors)
    pub x: u32,
    /// Latitude word (or point count for descriptors)
    pub y: u32,
}

impl RawPoint {
    /// Create a raw point from its two words.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Decode a point from its 8-byte on-disk form.
    #[inline]
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self {
            x: decode_u32_le([bytes[0], bytes[1], bytes[2], bytes[3]]),
            y: decode_u32_le([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Longitude in degrees, shifted by the cell's 360° multiple.
    #[inline]
    pub fn lon(&self, x_offset: i32) -> f64 {
        f64::from(x_offset) + scale_coordinate(self.x)
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        scale_coordinate(self.y)
    }
}

/// Decode a run of consecutive points.
///
/// Trailing bytes that do not form a whole point are ignored.
pub fn decode_points(bytes: &[u8]) -> Vec<RawPoint> {
    bytes
        .chunks_exact(POINT_SIZE as usize)
        .map(|chunk| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            RawPoint::from_bytes(raw)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_u32_le_one() {
        assert_eq!(decode_u32_le([0x01, 0x00, 0x00, 0x00]), 1);
    }

    #[test]
    fn test_decode_u32_le_all_ones() {
        assert_eq!(decode_u32_le([0xFF, 0xFF, 0xFF, 0xFF]), 4_294_967_295);
    }

    #[test]
    fn test_decode_u32_le_second_byte() {
        assert_eq!(decode_u32_le([0x00, 0x01, 0x00, 0x00]), 256);
    }

    #[test]
    fn test_decode_u32_le_matches_std() {
        let bytes = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(decode_u32_le(bytes), u32::from_le_bytes(bytes));
    }

    #[test]
    fn test_scale_coordinate() {
        assert!((scale_coordinate(1_500_000) - 1.5).abs() < 1e-12);
        assert_eq!(scale_coordinate(0), 0.0);
    }

    #[test]
    fn test_high_bit_coordinate_stays_positive() {
        // No signed reinterpretation: 0xFFFFFFFF is a large magnitude
        let degrees = scale_coordinate(u32::MAX);
        assert!(degrees > 4294.0);
    }

    #[test]
    fn test_raw_point_from_bytes() {
        let point = RawPoint::from_bytes([0x40, 0x42, 0x0F, 0x00, 0x80, 0x84, 0x1E, 0x00]);
        assert_eq!(point, RawPoint::new(1_000_000, 2_000_000));
        assert!((point.lat() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_raw_point_lon_applies_offset() {
        let point = RawPoint::new(500_000, 0);
        assert!((point.lon(0) - 0.5).abs() < 1e-12);
        assert!((point.lon(-360) - (-359.5)).abs() < 1e-12);
    }

    #[test]
    fn test_decode_points_ignores_partial_tail() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xAA, 0xBB]);

        let points = decode_points(&bytes);
        assert_eq!(points, vec![RawPoint::new(1, 2)]);
    }
}
