//! The four decode caches for one open resolution.

use std::sync::Arc;

use super::BoundedCache;
use crate::codec::RawPoint;

/// Default catalog cache capacity.
pub const DEFAULT_CATALOG_CAPACITY: usize = 32_768;
/// Default opcode/ID cache capacity.
pub const DEFAULT_OPCODE_CAPACITY: usize = 65_536;
/// Default coordinate-pair cache capacity.
pub const DEFAULT_COORDINATE_CAPACITY: usize = 65_536;
/// Default rim point-list cache capacity.
pub const DEFAULT_RIM_CAPACITY: usize = 32_768;

/// Capacities for the four decode caches.
///
/// A capacity of zero disables that cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacities {
    /// Catalog offset → polygon stream offset
    pub catalog: usize,
    /// Cel offset → piece byte, opcode byte or polygon ID
    pub opcodes: usize,
    /// Cel offset → point or rim descriptor
    pub coordinates: usize,
    /// Rim offset → whole rim segment
    pub rims: usize,
}

impl Default for CacheCapacities {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG_CAPACITY,
            opcodes: DEFAULT_OPCODE_CAPACITY,
            coordinates: DEFAULT_COORDINATE_CAPACITY,
            rims: DEFAULT_RIM_CAPACITY,
        }
    }
}

impl CacheCapacities {
    /// Capacities with every cache disabled.
    pub fn disabled() -> Self {
        Self {
            catalog: 0,
            opcodes: 0,
            coordinates: 0,
            rims: 0,
        }
    }
}

/// Entry counts of the four caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheSizes {
    pub catalog: usize,
    pub opcodes: usize,
    pub coordinates: usize,
    pub rims: usize,
}

impl CacheSizes {
    /// Sum of all entry counts.
    pub fn total(&self) -> usize {
        self.catalog + self.opcodes + self.coordinates + self.rims
    }

    /// True if every cache is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Caches keyed by absolute byte offsets into the files of one resolution.
///
/// Entries are only valid for the files they were read from, so the whole
/// set is cleared together whenever the resolution changes.
#[derive(Debug, Clone)]
pub struct DecodeCaches {
    pub(crate) catalog: BoundedCache<u64, u64>,
    pub(crate) opcodes: BoundedCache<u64, u32>,
    pub(crate) coordinates: BoundedCache<u64, RawPoint>,
    pub(crate) rims: BoundedCache<u64, Arc<[RawPoint]>>,
}

impl DecodeCaches {
    /// Create empty caches with the given capacities.
    pub fn new(capacities: CacheCapacities) -> Self {
        Self {
            catalog: BoundedCache::new(capacities.catalog),
            opcodes: BoundedCache::new(capacities.opcodes),
            coordinates: BoundedCache::new(capacities.coordinates),
            rims: BoundedCache::new(capacities.rims),
        }
    }

    /// Clear all four caches.
    pub fn clear_all(&mut self) {
        self.catalog.clear();
        self.opcodes.clear();
        self.coordinates.clear();
        self.rims.clear();
    }

    /// Current entry counts.
    pub fn sizes(&self) -> CacheSizes {
        CacheSizes {
            catalog: self.catalog.size(),
            opcodes: self.opcodes.size(),
            coordinates: self.coordinates.size(),
            rims: self.rims.size(),
        }
    }

    /// Configured capacities.
    pub fn capacities(&self) -> CacheCapacities {
        CacheCapacities {
            catalog: self.catalog.max_size(),
            opcodes: self.opcodes.max_size(),
            coordinates: self.coordinates.max_size(),
            rims: self.rims.max_size(),
        }
    }
}

impl Default for DecodeCaches {
    fn default() -> Self {
        Self::new(CacheCapacities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let caches = DecodeCaches::default();
        assert_eq!(caches.capacities(), CacheCapacities::default());
        assert_eq!(caches.capacities().opcodes, 65_536);
        assert_eq!(caches.capacities().rims, 32_768);
    }

    #[test]
    fn test_clear_all_empties_every_cache() {
        let mut caches = DecodeCaches::default();
        caches.catalog.put(0, 1);
        caches.opcodes.put(1, 2);
        caches.coordinates.put(2, RawPoint::new(3, 4));
        caches.rims.put(5, Arc::from(vec![RawPoint::new(6, 7)]));
        assert_eq!(caches.sizes().total(), 4);

        caches.clear_all();
        assert!(caches.sizes().is_empty());
    }

    #[test]
    fn test_disabled_caches_hold_nothing() {
        let mut caches = DecodeCaches::new(CacheCapacities::disabled());
        caches.catalog.put(0, 1);
        caches.opcodes.put(0, 1);
        assert!(caches.sizes().is_empty());
    }
}
