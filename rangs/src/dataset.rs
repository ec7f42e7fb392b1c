//! The map dataset: open data files, their caches and the decode entry
//! points.

use tracing::{debug, info};

use crate::cache::{CacheCapacities, CacheSizes, DecodeCaches};
use crate::config::ConfigFile;
use crate::coord::{GridCell, ViewBox};
use crate::decoder::{self, DecodeStats};
use crate::detail::RenderOptions;
use crate::error::MapError;
use crate::geometry::{GeometryBuffer, Projection, RenderSink, DEFAULT_BUFFER_CAPACITY};
use crate::source::{DataDirectory, DataFiles, DataOpener, Resolution};

/// One resolution of the RANGS data set and its decode caches.
///
/// Every cache key is a byte offset into the files of the open resolution,
/// so switching resolution clears all caches before the new files are
/// read. All operations take `&mut self`; a decode cannot overlap another
/// decode or a resolution switch.
pub struct MapDataset<O: DataOpener> {
    opener: O,
    resolution: Option<Resolution>,
    files: Option<DataFiles<O::Source>>,
    caches: DecodeCaches,
    buffer_capacity: usize,
}

impl<O: DataOpener> MapDataset<O> {
    /// Create a closed dataset with default cache capacities.
    pub fn new(opener: O) -> Self {
        Self::with_capacities(opener, CacheCapacities::default())
    }

    /// Create a closed dataset with the given cache capacities.
    pub fn with_capacities(opener: O, capacities: CacheCapacities) -> Self {
        Self {
            opener,
            resolution: None,
            files: None,
            caches: DecodeCaches::new(capacities),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Set the per-layer point capacity of the geometry buffer.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// The open resolution, if any.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn is_open(&self) -> bool {
        self.files.is_some()
    }

    /// Open the data files of resolution `level` (0 finest, 4 coarsest).
    ///
    /// Reopening the current resolution is a no-op. Otherwise the old
    /// handles are dropped and every cache is cleared before the new files
    /// are opened. If opening fails the dataset is left closed.
    pub fn open_resolution(&mut self, level: u8) -> Result<(), MapError> {
        let resolution = Resolution::new(level)?;
        if self.resolution == Some(resolution) && self.files.is_some() {
            debug!(resolution = %resolution, "Resolution already open");
            return Ok(());
        }

        self.close_resolution();
        let files = self.opener.open(resolution)?;
        self.files = Some(files);
        self.resolution = Some(resolution);

        info!(resolution = %resolution, "Opened resolution");
        Ok(())
    }

    /// Drop the open file handles and clear every cache.
    pub fn close_resolution(&mut self) {
        if let Some(resolution) = self.resolution.take() {
            info!(resolution = %resolution, "Closed resolution");
        }
        self.files = None;
        self.caches.clear_all();
    }

    /// Empty all four caches. File handles stay open.
    pub fn clear_caches(&mut self) {
        self.caches.clear_all();
        debug!("Cleared decode caches");
    }

    /// Current entry counts of the caches.
    pub fn cache_sizes(&self) -> CacheSizes {
        self.caches.sizes()
    }

    /// Decode the cell at (`lat`, `lon`) and hand its shapes to `sink`.
    ///
    /// `lon` may be any integer; it is normalized into 0..360 and decoded
    /// positions keep the caller's 360° multiple.
    pub fn decode_cell(
        &mut self,
        lat: i32,
        lon: i32,
        options: &RenderOptions,
        projection: &dyn Projection,
        sink: &mut dyn RenderSink,
    ) -> Result<DecodeStats, MapError> {
        let cell = GridCell::new(lat, lon)?;
        self.decode_grid_cell(&cell, options, projection, sink)
    }

    /// Decode every cell covering `view`, north to south.
    ///
    /// Stops at the first cell that fails.
    pub fn render_viewport(
        &mut self,
        view: &ViewBox,
        options: &RenderOptions,
        projection: &dyn Projection,
        sink: &mut dyn RenderSink,
    ) -> Result<DecodeStats, MapError> {
        let view = view.normalized();
        let mut total = DecodeStats::default();

        for cell in view.cells()? {
            let stats = self.decode_grid_cell(&cell, options, projection, &mut *sink)?;
            total.merge(&stats);
        }

        info!(
            cells = total.cells,
            polygons = total.polygons,
            rings = total.rings,
            lines = total.lines,
            hit_rate = format!("{:.1}%", total.hit_rate() * 100.0),
            "Rendered viewport"
        );
        Ok(total)
    }

    fn decode_grid_cell(
        &mut self,
        cell: &GridCell,
        options: &RenderOptions,
        projection: &dyn Projection,
        sink: &mut dyn RenderSink,
    ) -> Result<DecodeStats, MapError> {
        let files = self.files.as_mut().ok_or(MapError::NotOpen)?;
        let mut buffer = GeometryBuffer::with_capacity(projection, sink, self.buffer_capacity);
        decoder::decode_cell(files, &mut self.caches, cell, options, &mut buffer)
    }
}

impl MapDataset<DataDirectory> {
    /// A closed dataset over the configured data directory, with the
    /// configured cache and buffer capacities.
    pub fn from_config(config: &ConfigFile) -> Self {
        MapDataset::with_capacities(
            DataDirectory::new(&config.data.directory),
            config.cache_capacities(),
        )
        .with_buffer_capacity(config.buffer.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CoordError;
    use crate::error::DataFile;
    use crate::geometry::{Geographic, ShapeCollector};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::io::{self, Cursor};
    use std::path::PathBuf;

    /// In-memory data sets keyed by resolution level.
    #[derive(Default)]
    struct MemoryOpener {
        sets: HashMap<u8, [Vec<u8>; 3]>,
        opens: Cell<usize>,
    }

    impl DataOpener for MemoryOpener {
        type Source = Cursor<Vec<u8>>;

        fn open(&self, resolution: Resolution) -> Result<DataFiles<Self::Source>, MapError> {
            self.opens.set(self.opens.get() + 1);
            let [catalog, polygons, rims] =
                self.sets
                    .get(&resolution.level())
                    .cloned()
                    .ok_or_else(|| MapError::FatalOpen {
                        file: DataFile::Catalog,
                        path: PathBuf::from(format!("rangs({}).cat", resolution)),
                        source: io::Error::new(io::ErrorKind::NotFound, "missing"),
                    })?;
            Ok(DataFiles {
                catalog: Cursor::new(catalog),
                polygons: Cursor::new(polygons),
                rims: Cursor::new(rims),
            })
        }
    }

    /// A land triangle in each of `cells`, with catalog entries. Every
    /// triangle ends with the same two-point rim segment.
    fn triangle_set(cells: &[GridCell]) -> [Vec<u8>; 3] {
        let catalog_len = cells
            .iter()
            .map(|c| c.catalog_index() as usize + 4)
            .max()
            .unwrap_or(0);
        let mut catalog = vec![0u8; catalog_len];
        let mut polygons = Vec::new();

        for cell in cells {
            let index = cell.catalog_index() as usize;
            let entry = polygons.len() as u32 + 1;
            catalog[index..index + 4].copy_from_slice(&entry.to_le_bytes());

            let base_lon = cell.column * 1_000_000;
            let base_lat = (cell.lat - 1).max(0) as u32 * 1_000_000;
            polygons.push(1u8);
            polygons.extend_from_slice(&1u32.to_le_bytes());
            polygons.push(0x13);
            for (x, y) in [(100_000, 100_000), (900_000, 100_000), (500_000, 900_000)] {
                polygons.extend_from_slice(&(base_lon + x).to_le_bytes());
                polygons.extend_from_slice(&(base_lat + y).to_le_bytes());
            }
            polygons.push(0x17);
            polygons.extend_from_slice(&1u32.to_le_bytes());
            polygons.extend_from_slice(&2u32.to_le_bytes());
            polygons.extend_from_slice(&[0, 0]);
        }

        let mut rims = Vec::new();
        for word in [400_000u32, 100_000, 300_000, 200_000] {
            rims.extend_from_slice(&word.to_le_bytes());
        }
        [catalog, polygons, rims]
    }

    fn dataset_with(levels: &[u8], cells: &[GridCell]) -> MapDataset<MemoryOpener> {
        let mut opener = MemoryOpener::default();
        for &level in levels {
            opener.sets.insert(level, triangle_set(cells));
        }
        MapDataset::new(opener)
    }

    fn fill() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_decode_before_open_fails() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        let mut sink = ShapeCollector::new();

        let err = dataset
            .decode_cell(50, 0, &fill(), &Geographic, &mut sink)
            .unwrap_err();
        assert!(matches!(err, MapError::NotOpen));
    }

    #[test]
    fn test_invalid_resolution() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        assert!(matches!(
            dataset.open_resolution(5),
            Err(MapError::InvalidResolution(5))
        ));
        assert!(!dataset.is_open());
    }

    #[test]
    fn test_decode_cell_emits_ring() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();

        let mut sink = ShapeCollector::new();
        let options = RenderOptions::new(
            crate::detail::DetailLevel::Coastlines,
            crate::detail::RenderMode::Fill,
        );
        let stats = dataset
            .decode_cell(50, 0, &options, &Geographic, &mut sink)
            .unwrap();

        assert_eq!(stats.cells, 1);
        assert_eq!(stats.rings, 1);
        assert_eq!(sink.rings().count(), 1);
        assert!(!dataset.cache_sizes().is_empty());
    }

    #[test]
    fn test_invalid_cell_rejected_before_read() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();

        let mut sink = ShapeCollector::new();
        let err = dataset
            .decode_cell(90, 0, &fill(), &Geographic, &mut sink)
            .unwrap_err();
        assert!(matches!(err, MapError::Coord(_)));
        assert!(dataset.cache_sizes().is_empty());
    }

    #[test]
    fn test_resolution_switch_clears_caches() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[1, 3], &[cell]);
        dataset.open_resolution(3).unwrap();
        let mut sink = ShapeCollector::new();
        dataset
            .decode_cell(50, 0, &fill(), &Geographic, &mut sink)
            .unwrap();
        let filled = dataset.cache_sizes();
        assert!(filled.catalog > 0);
        assert!(filled.opcodes > 0);
        assert!(filled.coordinates > 0);
        assert_eq!(filled.rims, 1);

        dataset.open_resolution(1).unwrap();

        assert_eq!(dataset.resolution(), Some(Resolution::new(1).unwrap()));
        assert_eq!(dataset.cache_sizes(), CacheSizes::default());
    }

    #[test]
    fn test_reopening_same_resolution_keeps_caches() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();
        let mut sink = ShapeCollector::new();
        dataset
            .decode_cell(50, 0, &fill(), &Geographic, &mut sink)
            .unwrap();
        let sizes = dataset.cache_sizes();

        dataset.open_resolution(3).unwrap();

        assert_eq!(dataset.opener().opens.get(), 1);
        assert_eq!(dataset.cache_sizes(), sizes);
    }

    #[test]
    fn test_failed_open_leaves_dataset_closed() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();
        let mut sink = ShapeCollector::new();
        dataset
            .decode_cell(50, 0, &fill(), &Geographic, &mut sink)
            .unwrap();

        let err = dataset.open_resolution(0).unwrap_err();

        assert!(matches!(err, MapError::FatalOpen { .. }));
        assert!(!dataset.is_open());
        assert_eq!(dataset.resolution(), None);
        assert!(dataset.cache_sizes().is_empty());
    }

    #[test]
    fn test_clear_caches_keeps_files_open() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();
        let mut sink = ShapeCollector::new();
        dataset
            .decode_cell(50, 0, &fill(), &Geographic, &mut sink)
            .unwrap();

        dataset.clear_caches();

        assert!(dataset.is_open());
        assert!(dataset.cache_sizes().is_empty());
    }

    #[test]
    fn test_render_viewport_visits_covering_cells() {
        let view = ViewBox::new(50.5, 0.2, 49.5, 1.5);
        let cells: Vec<GridCell> = view.normalized().cells().unwrap().collect();
        assert_eq!(cells.len(), 9);
        let mut dataset = dataset_with(&[3], &cells);
        dataset.open_resolution(3).unwrap();

        let mut sink = ShapeCollector::new();
        let stats = dataset
            .render_viewport(&view, &fill(), &Geographic, &mut sink)
            .unwrap();

        assert_eq!(stats.cells, 9);
        assert_eq!(stats.rings, 9);
        assert_eq!(sink.rings().count(), 9);
    }

    #[test]
    fn test_render_viewport_rejects_non_finite_view() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();

        let mut sink = ShapeCollector::new();
        let view = ViewBox::new(50.5, f64::NAN, 49.5, 1.5);
        let err = dataset
            .render_viewport(&view, &fill(), &Geographic, &mut sink)
            .unwrap_err();

        assert!(matches!(err, MapError::Coord(CoordError::InvalidViewEdge { edge: "west", .. })));
        assert!(dataset.cache_sizes().is_empty());
    }

    #[test]
    fn test_render_viewport_stops_at_missing_cell() {
        let cell = GridCell::new(50, 0).unwrap();
        let mut dataset = dataset_with(&[3], &[cell]);
        dataset.open_resolution(3).unwrap();

        let mut sink = ShapeCollector::new();
        let view = ViewBox::new(50.5, 0.2, 49.5, 1.5);
        let err = dataset
            .render_viewport(&view, &fill(), &Geographic, &mut sink)
            .unwrap_err();

        // The first cell visited (51, 0) has no catalog entry
        assert!(matches!(err, MapError::Corrupt { .. } | MapError::Read { .. }));
        assert!(sink.shapes.is_empty());
    }
}
