//! Coordinate type definitions

use std::fmt;

use super::{catalog_index, normalize_longitude};

/// Northernmost cell latitude present in the catalog.
pub const MAX_CELL_LAT: i32 = 89;
/// Southernmost cell latitude present in the catalog.
pub const MIN_CELL_LAT: i32 = -90;

/// Largest longitude magnitude a view box edge may have.
pub const MAX_VIEW_LON: f64 = 720.0;

/// Minimum extent of a view box in degrees.
pub const VIEW_EPSILON: f64 = 0.001;

/// One integer-degree catalog cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Latitude as requested
    pub lat: i32,
    /// Longitude as requested (may lie outside 0..360)
    pub lon: i32,
    /// Longitude folded into 0..360
    pub column: u32,
    /// `lon - column`, a multiple of 360 added to decoded longitudes
    pub x_offset: i32,
}

impl GridCell {
    /// Create a cell, validating the latitude against the catalog rows.
    pub fn new(lat: i32, lon: i32) -> Result<Self, CoordError> {
        if !(MIN_CELL_LAT..=MAX_CELL_LAT).contains(&lat) {
            return Err(CoordError::InvalidCellLatitude(lat));
        }
        let (column, x_offset) =
            normalize_longitude(lon).ok_or(CoordError::InvalidCellLongitude(lon))?;
        Ok(Self {
            lat,
            lon,
            column,
            x_offset,
        })
    }

    /// Byte offset of this cell's catalog entry.
    #[inline]
    pub fn catalog_index(&self) -> u64 {
        catalog_index(self.lat, self.column)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A geographic view box in degrees.
///
/// `north`/`west` is the top-left corner, `south`/`east` the bottom-right.
/// West may be numerically greater than east when the box crosses the
/// 0°/360° seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl Default for ViewBox {
    /// Great Britain and Ireland.
    fn default() -> Self {
        Self {
            north: 60.0,
            west: 348.0,
            south: 48.0,
            east: 5.0,
        }
    }
}

impl ViewBox {
    /// Create a view box from its corners.
    pub fn new(north: f64, west: f64, south: f64, east: f64) -> Self {
        Self {
            north,
            west,
            south,
            east,
        }
    }

    /// Prepare the box for cell iteration and projection.
    ///
    /// Unwraps a seam crossing by moving `west` down by 360°, widens
    /// degenerate boxes by [`VIEW_EPSILON`] and clamps latitude to the
    /// catalog rows.
    pub fn normalized(&self) -> Self {
        let mut view = *self;
        if view.west > view.east {
            view.west -= 360.0;
        }
        view.north = view.north.min(f64::from(MAX_CELL_LAT));
        view.south = view.south.max(f64::from(MIN_CELL_LAT));
        if (view.north - view.south).abs() < VIEW_EPSILON {
            view.south = view.north - VIEW_EPSILON;
        }
        if (view.west - view.east).abs() < VIEW_EPSILON {
            view.east = view.west + VIEW_EPSILON;
        }
        view
    }

    /// Width in degrees.
    pub fn width(&self) -> f64 {
        (self.east - self.west).abs()
    }

    /// Height in degrees.
    pub fn height(&self) -> f64 {
        (self.north - self.south).abs()
    }

    /// Cells covering the box, north to south, west to east.
    ///
    /// Call on a [normalized](Self::normalized) box. Edges that are not
    /// finite, or longitudes beyond [`MAX_VIEW_LON`], are rejected.
    pub fn cells(&self) -> Result<impl Iterator<Item = GridCell>, CoordError> {
        self.validate()?;
        let top = self.north.ceil() as i32;
        let bottom = self.south.floor() as i32;
        let left = self.west.floor() as i32;
        let right = self.east.ceil() as i32;

        Ok((bottom..=top)
            .rev()
            .flat_map(move |lat| (left..=right).filter_map(move |lon| GridCell::new(lat, lon).ok())))
    }

    fn validate(&self) -> Result<(), CoordError> {
        let edges = [
            ("north", self.north),
            ("west", self.west),
            ("south", self.south),
            ("east", self.east),
        ];
        for (edge, value) in edges {
            if !value.is_finite() {
                return Err(CoordError::InvalidViewEdge { edge, value });
            }
        }
        for (edge, value) in [("west", self.west), ("east", self.east)] {
            if value.abs() > MAX_VIEW_LON {
                return Err(CoordError::InvalidViewEdge { edge, value });
            }
        }
        Ok(())
    }
}

/// Errors from cell and view box construction.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Cell latitude outside the catalog (-90 to 89)
    InvalidCellLatitude(i32),
    /// Cell longitude whose 360° offset overflows
    InvalidCellLongitude(i32),
    /// View box edge not finite or too far from the 0..360 range
    InvalidViewEdge { edge: &'static str, value: f64 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidCellLatitude(lat) => write!(
                f,
                "Invalid cell latitude: {} (must be between {} and {})",
                lat, MIN_CELL_LAT, MAX_CELL_LAT
            ),
            CoordError::InvalidCellLongitude(lon) => {
                write!(f, "Invalid cell longitude: {}", lon)
            }
            CoordError::InvalidViewEdge { edge, value } => write!(
                f,
                "Invalid view box {} edge: {} (must be finite and within ±{})",
                edge, value, MAX_VIEW_LON
            ),
        }
    }
}

impl std::error::Error for CoordError {}
