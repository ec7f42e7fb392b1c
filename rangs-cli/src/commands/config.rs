//! Configuration management CLI commands.

use std::path::Path;

use clap::Subcommand;
use rangs::config::ConfigFile;

use crate::error::CliError;
use crate::runner::{load_config, resolve_config_path};

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", resolve_config_path(config_path).display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            print!("{}", config.to_ini_string());
            Ok(())
        }
        ConfigCommands::Init => run_init(config_path),
    }
}

fn run_init(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);
    if path.exists() {
        println!("Configuration already exists: {}", path.display());
        return Ok(());
    }

    ConfigFile::default().save_to(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
