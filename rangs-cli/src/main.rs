//! RANGS CLI - Command-line interface
//!
//! Decodes cells and view boxes of a RANGS data set and manages the
//! configuration file.

mod commands;
mod error;
mod runner;
mod svg;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::cell::CellArgs;
use commands::config::ConfigCommands;
use commands::render::RenderArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "rangs")]
#[command(version = rangs::VERSION)]
#[command(about = "Decode RANGS/GSHHS coastline data", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.rangs/config.ini
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one grid cell and list its shapes
    Cell(CellArgs),

    /// Decode every cell of a view box, optionally writing SVG
    Render(RenderArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Cell(args) => commands::cell::run(args, config_path),
        Commands::Render(args) => commands::render::run(args, config_path),
        Commands::Config { command } => commands::config::run(command, config_path),
    }
}
