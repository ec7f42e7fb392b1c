//! Per-pass decode statistics.

use crate::geometry::EmitCounts;

/// Counters collected while decoding one or more cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    /// Cells visited
    pub cells: usize,
    /// Polygon records decoded
    pub polygons: usize,
    /// Deepest nesting level reached (0 = top-level polygon)
    pub max_depth: usize,
    /// Rim segments resolved
    pub rim_segments: usize,
    /// Reads served from a cache
    pub cache_hits: u64,
    /// Reads that went to a file
    pub cache_misses: u64,
    /// Bytes read from files
    pub bytes_read: u64,
    /// Fill rings emitted
    pub rings: usize,
    /// Shore lines emitted
    pub lines: usize,
    /// Points emitted across all shapes
    pub points_emitted: usize,
}

impl DecodeStats {
    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: &DecodeStats) {
        self.cells += other.cells;
        self.polygons += other.polygons;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.rim_segments += other.rim_segments;
        self.cache_hits += other.cache_hits;
        self.cache_misses += other.cache_misses;
        self.bytes_read += other.bytes_read;
        self.rings += other.rings;
        self.lines += other.lines;
        self.points_emitted += other.points_emitted;
    }

    /// Fraction of reads served from cache (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    pub(crate) fn record_emitted(&mut self, counts: EmitCounts) {
        self.rings = counts.rings;
        self.lines = counts.lines;
        self.points_emitted = counts.points;
    }
}
