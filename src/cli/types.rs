use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::GridDims;
use crate::runtime::MaskSummary;

#[derive(Debug, Parser)]
#[command(
    name = "heatmask",
    version,
    about = "Headless mask editing over paired heatmaps"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Summarises one or two data matrices.
    Info {
        #[arg(required = true, num_args = 1..=2)]
        inputs: Vec<PathBuf>,
        #[arg(long)]
        mask: Option<PathBuf>,
    },
    /// Replays recorded input events and writes the resulting mask.
    Replay {
        /// Data matrix per view, primary first.
        #[arg(long = "data", required = true)]
        data: Vec<PathBuf>,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Mask to start from instead of an empty one.
        #[arg(long)]
        mask: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Prints the keys to add to and remove from `current` to reach `target`.
    Diff {
        target: PathBuf,
        current: PathBuf,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct MatrixInfo {
    pub(super) source: String,
    pub(super) dims: GridDims,
    pub(super) missing: usize,
    pub(super) min: Option<f64>,
    pub(super) max: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct WorkbenchInfo {
    pub(super) matrices: Vec<MatrixInfo>,
    pub(super) mask_dims: GridDims,
    pub(super) mask: Option<MaskSummary>,
}

#[derive(Debug, Serialize)]
pub(super) struct DiffOutput {
    pub(super) to_add: Vec<String>,
    pub(super) to_remove: Vec<String>,
}
