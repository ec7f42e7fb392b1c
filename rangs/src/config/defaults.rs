//! Default values for every configuration setting.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::cache::{
    DEFAULT_CATALOG_CAPACITY, DEFAULT_COORDINATE_CAPACITY, DEFAULT_OPCODE_CAPACITY,
    DEFAULT_RIM_CAPACITY,
};
use crate::coord::ViewBox;
use crate::detail::{DetailLevel, RenderMode};
use crate::geometry::DEFAULT_BUFFER_CAPACITY;
use crate::logging::DEFAULT_LOG_FILE;
use crate::source::Resolution;

/// Name of the data directory under the config directory.
pub const DEFAULT_DATA_DIR_NAME: &str = "data";

/// Name of the log directory under the config directory.
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Default data directory (~/.rangs/data).
pub fn default_data_directory() -> PathBuf {
    config_directory().join(DEFAULT_DATA_DIR_NAME)
}

/// Default log directory (~/.rangs/logs).
pub fn default_log_directory() -> PathBuf {
    config_directory().join(DEFAULT_LOG_DIR_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            data: DataSettings {
                directory: default_data_directory(),
                resolution: Resolution::default(),
            },
            render: RenderSettings {
                detail: DetailLevel::default(),
                mode: RenderMode::default(),
                emit_all_boundary_points: false,
                view: ViewBox::default(),
            },
            cache: CacheSettings {
                enabled: true,
                catalog: DEFAULT_CATALOG_CAPACITY,
                opcodes: DEFAULT_OPCODE_CAPACITY,
                coordinates: DEFAULT_COORDINATE_CAPACITY,
                rims: DEFAULT_RIM_CAPACITY,
            },
            buffer: BufferSettings {
                capacity: DEFAULT_BUFFER_CAPACITY,
            },
            logging: LoggingSettings {
                directory: default_log_directory(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
