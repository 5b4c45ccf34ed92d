//! Plinth command-line interface.
//!
//! Runs the full inspection pipeline over a PLY model: repair,
//! canonical pose, surface sampling, voxel display, clipping, gradient
//! coloring, and numbered PLY artifacts in the output directory.
//!
//! ```bash
//! plinth --model hollow_knight_clean.ply --axis y --keep left
//! plinth --model scan.ply --voxel-size 0.02 --headless
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use mesh_pipeline::{
    run_pipeline, PipelineConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_COUNT,
    DEFAULT_SUBSAMPLE_SEED, DEFAULT_TARGET_HEIGHT,
};
use mesh_transform::ClipSide;
use mesh_types::Axis;

/// Mesh inspection pipeline
#[derive(Parser)]
#[command(name = "plinth")]
#[command(version, about = "Mesh inspection pipeline", long_about = None)]
struct Cli {
    /// Input PLY model
    #[arg(long, default_value = "hollow_knight_clean.ply")]
    model: PathBuf,

    /// Voxel edge length in world units (0 = auto from the bounding box)
    #[arg(long, default_value_t = 0.0)]
    voxel_size: f64,

    /// Axis for the clip plane and color gradient
    #[arg(long, value_enum, default_value = "y")]
    axis: AxisArg,

    /// Which side of the clip plane to keep
    #[arg(long, value_enum, default_value = "left")]
    keep: KeepArg,

    /// Canonical height the tallest extent is scaled to
    #[arg(long, default_value_t = DEFAULT_TARGET_HEIGHT)]
    target_height: f64,

    /// Invert the upright quarter turn
    #[arg(long)]
    invert_rotation: bool,

    /// Number of surface sample points
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Seed for the voxel display subsample
    #[arg(long, default_value_t = DEFAULT_SUBSAMPLE_SEED)]
    seed: u64,

    /// Skip all viewer stages
    #[arg(long)]
    headless: bool,

    /// Output directory for numbered artifacts
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    /// Clip and grade along X
    X,
    /// Clip and grade along Y (height)
    Y,
    /// Clip and grade along Z
    Z,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
            AxisArg::Z => Self::Z,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KeepArg {
    /// Keep the side at or below the plane
    Left,
    /// Keep the side at or above the plane
    Right,
}

impl From<KeepArg> for ClipSide {
    fn from(keep: KeepArg) -> Self {
        match keep {
            KeepArg::Left => Self::Left,
            KeepArg::Right => Self::Right,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = PipelineConfig::new(&cli.model)
        .with_output_dir(&cli.output)
        .with_axis(cli.axis.into())
        .with_keep(cli.keep.into())
        .with_voxel_size(cli.voxel_size)
        .with_target_height(cli.target_height)
        .with_invert_rotation(cli.invert_rotation)
        .with_sample_count(cli.samples)
        .with_subsample_seed(cli.seed)
        .with_headless(cli.headless);

    let report = run_pipeline(&config)?;
    println!("{report}");
    Ok(())
}
