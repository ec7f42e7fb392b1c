//! RANGS - decoder for the tiled RANGS/GSHHS coastline format
//!
//! The data set is split into one-degree grid cells. A catalog file maps
//! each cell to its records in a polygon (cel) file; long runs of
//! coastline shared between neighbouring polygons live once in a rim file.
//! This crate resolves cells, walks their nested polygon records and
//! assembles the decoded points into fill rings and shore polylines for a
//! caller-supplied sink. Repeated reads are served by bounded FIFO caches.
//!
//! # High-Level API
//!
//! ```no_run
//! use rangs::dataset::MapDataset;
//! use rangs::detail::RenderOptions;
//! use rangs::geometry::{Geographic, ShapeCollector};
//! use rangs::source::DataDirectory;
//!
//! let mut dataset = MapDataset::new(DataDirectory::new("/srv/rangs"));
//! dataset.open_resolution(2)?;
//!
//! let mut shapes = ShapeCollector::new();
//! dataset.decode_cell(51, -1, &RenderOptions::default(), &Geographic, &mut shapes)?;
//! println!("{} rings", shapes.rings().count());
//! # Ok::<(), rangs::MapError>(())
//! ```

pub mod cache;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod coord;
pub mod dataset;
pub mod decoder;
pub mod detail;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod source;

pub use dataset::MapDataset;
pub use error::{DataFile, MapError};

/// Version of the library and CLI.
///
/// Synchronized across the workspace; injected from `Cargo.toml` at
/// compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
