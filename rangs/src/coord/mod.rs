//! Grid cells and geographic view boxes.
//!
//! RANGS data is indexed by one-degree cells. A cell is named by the
//! integer latitude of its northern edge and the integer longitude of its
//! western edge; longitudes outside `0..360` are folded into that range and
//! the folded-away multiple of 360° is kept as the cell's `x_offset`.

mod types;

pub use types::{
    CoordError, GridCell, ViewBox, MAX_CELL_LAT, MAX_VIEW_LON, MIN_CELL_LAT, VIEW_EPSILON,
};

/// Fold a longitude into `0..360`, returning `(column, x_offset)`.
///
/// Returns `None` when the 360° multiple does not fit in an `i32`.
#[inline]
pub fn normalize_longitude(lon: i32) -> Option<(u32, i32)> {
    let column = lon.rem_euclid(360);
    let x_offset = lon.checked_sub(column)?;
    Some((column as u32, x_offset))
}

/// Byte offset of a cell's entry in the catalog file.
#[inline]
pub fn catalog_index(lat: i32, column: u32) -> u64 {
    let row = (MAX_CELL_LAT - lat) as u64;
    4 * (row * 360 + u64::from(column))
}
