//! `render` command: decode every cell of a view box.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Args;
use rangs::geometry::{Palette, ShapeCollector, ViewTransform};
use tracing::info;

use super::common::{print_stats, DecodeArgs};
use crate::error::CliError;
use crate::runner::CliRunner;
use crate::svg;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Northern edge in degrees (default from config)
    #[arg(long, allow_hyphen_values = true)]
    pub north: Option<f64>,

    /// Western edge in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub west: Option<f64>,

    /// Southern edge in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub south: Option<f64>,

    /// Eastern edge in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub east: Option<f64>,

    /// Output width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Output height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Write the map as SVG to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

/// Run the render command.
pub fn run(args: RenderArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    if args.width == 0 || args.height == 0 {
        return Err(CliError::InvalidArgument(
            "width and height must be positive".to_string(),
        ));
    }

    let mut runner = CliRunner::new(config_path)?;
    args.decode.apply(runner.config_mut())?;

    let mut view = runner.config().render.view;
    if let Some(north) = args.north {
        view.north = north;
    }
    if let Some(west) = args.west {
        view.west = west;
    }
    if let Some(south) = args.south {
        view.south = south;
    }
    if let Some(east) = args.east {
        view.east = east;
    }
    let view = view.normalized();

    let mut dataset = runner.open_dataset()?;
    let options = runner.config().render_options();
    let transform = ViewTransform::new(view, f64::from(args.width), f64::from(args.height));
    let mut shapes = ShapeCollector::new();
    let stats = dataset.render_viewport(&view, &options, &transform, &mut shapes)?;

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|error| CliError::FileWrite {
            path: path.clone(),
            error,
        })?;
        let mut out = BufWriter::new(file);
        svg::write_svg(&mut out, &shapes.shapes, args.width, args.height, &Palette::default())
            .map_err(|error| CliError::FileWrite {
                path: path.clone(),
                error,
            })?;
        info!(path = %path.display(), shapes = shapes.shapes.len(), "Wrote SVG");
        println!("Wrote {}", path.display());
    }

    println!(
        "View N {:.3} W {:.3} S {:.3} E {:.3}",
        view.north, view.west, view.south, view.east
    );
    print_stats(&stats);
    Ok(())
}
