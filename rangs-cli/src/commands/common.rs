//! Arguments and helpers shared by the decoding commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rangs::config::ConfigFile;
use rangs::decoder::DecodeStats;
use rangs::detail::{DetailLevel, RenderMode};
use rangs::source::Resolution;

use crate::error::CliError;

/// Level of detail selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum DetailArg {
    /// Land against ocean only
    Coastlines,
    /// Add lakes
    Lakes,
    /// Add islands in lakes
    IslandsInLakes,
    /// Add ponds on islands in lakes
    PondsOnIslands,
}

impl From<DetailArg> for DetailLevel {
    fn from(arg: DetailArg) -> Self {
        match arg {
            DetailArg::Coastlines => DetailLevel::Coastlines,
            DetailArg::Lakes => DetailLevel::Lakes,
            DetailArg::IslandsInLakes => DetailLevel::IslandsInLakes,
            DetailArg::PondsOnIslands => DetailLevel::PondsOnIslands,
        }
    }
}

/// Render mode selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ModeArg {
    /// Closed, filled rings
    Fill,
    /// Shoreline polylines
    Outline,
}

impl From<ModeArg> for RenderMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Fill => RenderMode::Fill,
            ModeArg::Outline => RenderMode::Outline,
        }
    }
}

/// Options that override the config file for one decode.
#[derive(Debug, Clone, Default, Args)]
pub struct DecodeArgs {
    /// Directory holding rangs(N).cat, rangs(N).cel and gshhs(N).rim
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Resolution: 0 (finest) to 4 (coarsest)
    #[arg(long, short)]
    pub resolution: Option<u8>,

    /// Level of detail
    #[arg(long, value_enum)]
    pub detail: Option<DetailArg>,

    /// Fill rings or draw shorelines
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Emit every point of inline boundary runs as shoreline
    #[arg(long)]
    pub all_boundary_points: bool,

    /// Disable the decode caches
    #[arg(long)]
    pub no_cache: bool,
}

impl DecodeArgs {
    /// Apply the given overrides to `config`. CLI takes precedence.
    pub fn apply(&self, config: &mut ConfigFile) -> Result<(), CliError> {
        if let Some(dir) = &self.data_dir {
            config.data.directory = dir.clone();
        }
        if let Some(level) = self.resolution {
            config.data.resolution = Resolution::new(level).map_err(|_| {
                CliError::InvalidArgument(format!(
                    "resolution {} is out of range (0 finest to 4 coarsest)",
                    level
                ))
            })?;
        }
        if let Some(detail) = self.detail {
            config.render.detail = detail.into();
        }
        if let Some(mode) = self.mode {
            config.render.mode = mode.into();
        }
        if self.all_boundary_points {
            config.render.emit_all_boundary_points = true;
        }
        if self.no_cache {
            config.cache.enabled = false;
        }
        Ok(())
    }
}

/// Print a decode summary.
pub fn print_stats(stats: &DecodeStats) {
    println!("Cells:        {}", stats.cells);
    println!("Polygons:     {} (max depth {})", stats.polygons, stats.max_depth);
    println!("Rim segments: {}", stats.rim_segments);
    println!(
        "Shapes:       {} rings, {} lines, {} points",
        stats.rings, stats.lines, stats.points_emitted
    );
    println!(
        "Reads:        {} cached, {} from disk ({} bytes), hit rate {:.1}%",
        stats.cache_hits,
        stats.cache_misses,
        stats.bytes_read,
        stats.hit_rate() * 100.0
    );
}
