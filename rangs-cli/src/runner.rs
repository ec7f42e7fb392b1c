//! CLI runner for common setup.
//!
//! Loads the configuration, initializes logging and opens the dataset so
//! command handlers only deal with their own arguments.

use std::path::{Path, PathBuf};

use rangs::config::ConfigFile;
use rangs::logging::{init_logging, LoggingGuard};
use rangs::source::DataDirectory;
use rangs::MapDataset;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    _logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config from `config_path` (or the default path) and start
    /// logging.
    pub fn new(config_path: Option<&Path>) -> Result<Self, CliError> {
        let config = load_config(config_path)?;

        let logging_guard = init_logging(&config.logging.directory, &config.logging.file)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        info!(version = rangs::VERSION, "RANGS CLI started");

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Mutable access for command-line overrides.
    pub fn config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    /// Open the configured resolution of the configured data directory.
    pub fn open_dataset(&self) -> Result<MapDataset<DataDirectory>, CliError> {
        let mut dataset = MapDataset::from_config(&self.config);
        dataset.open_resolution(self.config.data.resolution.level())?;
        Ok(dataset)
    }
}

/// Load config from an explicit path or from ~/.rangs/config.ini.
pub fn load_config(config_path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match config_path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// The path a command should read config from.
pub fn resolve_config_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(rangs::config::config_file_path)
}
