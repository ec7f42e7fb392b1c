//! `cell` command: decode one grid cell and list its shapes.

use std::path::Path;

use clap::Args;
use rangs::geometry::{Geographic, ShapeCollector};

use super::common::{print_stats, DecodeArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct CellArgs {
    /// Latitude of the cell's northern edge (-90 to 89)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: i32,

    /// Longitude of the cell's western edge
    #[arg(long, allow_hyphen_values = true)]
    pub lon: i32,

    /// Print every point of every shape
    #[arg(long)]
    pub points: bool,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

/// Run the cell command.
pub fn run(args: CellArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let mut runner = CliRunner::new(config_path)?;
    args.decode.apply(runner.config_mut())?;

    let mut dataset = runner.open_dataset()?;
    let options = runner.config().render_options();
    let mut shapes = ShapeCollector::new();
    let stats = dataset.decode_cell(args.lat, args.lon, &options, &Geographic, &mut shapes)?;

    println!(
        "Cell ({}, {}) at resolution {}:",
        args.lat, args.lon, runner.config().data.resolution
    );
    for (i, shape) in shapes.shapes.iter().enumerate() {
        println!(
            "  #{:<4} {:?} {:<14} {} points",
            i,
            shape.kind,
            shape.class.to_string(),
            shape.points.len()
        );
        if args.points {
            for point in &shape.points {
                println!("        {:.6} {:.6}", point.x, point.y);
            }
        }
    }
    println!();
    print_stats(&stats);
    Ok(())
}
