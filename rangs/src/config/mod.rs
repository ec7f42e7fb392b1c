//! User configuration loaded from `~/.rangs/config.ini`.
//!
//! The file is optional. Every key falls back to its default, so a partial
//! file only needs the values that differ.
//!
//! # Example
//!
//! ```
//! use rangs::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! let options = config.render_options();
//! assert!(!options.emit_all_boundary_points);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    BufferSettings, CacheSettings, ConfigFile, DataSettings, LoggingSettings, RenderSettings,
};
