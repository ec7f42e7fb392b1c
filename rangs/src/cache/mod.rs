//! Bounded caches for repeated reads of the RANGS data files.
//!
//! Adjacent cells and redraws after small viewport changes hit the same
//! file offsets over and over, so every read in the decoder goes through
//! one of four [`BoundedCache`] instances grouped in [`DecodeCaches`].

mod bounded;
mod set;

pub use bounded::BoundedCache;
pub use set::{
    CacheCapacities, CacheSizes, DecodeCaches, DEFAULT_CATALOG_CAPACITY,
    DEFAULT_COORDINATE_CAPACITY, DEFAULT_OPCODE_CAPACITY, DEFAULT_RIM_CAPACITY,
};
