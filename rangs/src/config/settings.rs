//! Settings structs for each section of the config file.
//!
//! Each struct represents one `[section]`. These are plain data; parsing
//! lives in the parser module and serialization in the writer.

use std::path::PathBuf;

use crate::cache::CacheCapacities;
use crate::coord::ViewBox;
use crate::detail::{DetailLevel, RenderMode, RenderOptions};
use crate::source::Resolution;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Data file location
    pub data: DataSettings,
    /// Default render pass
    pub render: RenderSettings,
    /// Decode cache sizes
    pub cache: CacheSettings,
    /// Geometry buffer settings
    pub buffer: BufferSettings,
    /// Log output
    pub logging: LoggingSettings,
}

/// Where the RANGS files live and which resolution to open.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSettings {
    /// Directory holding `rangs(N).cat`, `rangs(N).cel` and `gshhs(N).rim`
    pub directory: PathBuf,
    /// Resolution opened at start-up
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub detail: DetailLevel,
    pub mode: RenderMode,
    /// Emit interior points of inline boundary runs as shoreline
    pub emit_all_boundary_points: bool,
    /// Initial view box
    pub view: ViewBox,
}

/// Capacities of the four decode caches.
///
/// A capacity of 0 disables that cache; `enabled = false` disables all.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    pub enabled: bool,
    pub catalog: usize,
    pub opcodes: usize,
    pub coordinates: usize,
    pub rims: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BufferSettings {
    /// Points per layer before a forced flush
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl ConfigFile {
    /// Decode options for the configured render pass.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.render.detail, self.render.mode)
            .with_all_boundary_points(self.render.emit_all_boundary_points)
    }

    /// Cache capacities, honouring the global switch.
    pub fn cache_capacities(&self) -> CacheCapacities {
        if !self.cache.enabled {
            return CacheCapacities::disabled();
        }
        CacheCapacities {
            catalog: self.cache.catalog,
            opcodes: self.cache.opcodes,
            coordinates: self.cache.coordinates,
            rims: self.cache.rims,
        }
    }
}
