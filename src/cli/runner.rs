use clap::Parser;
use serde::Serialize;

use crate::interaction::ViewId;
use crate::model::{GridCoord, GridDims, encode};
use crate::runtime::{AppContext, SessionConfig, Workbench, load_config};

use super::types::{Cli, Commands, DiffOutput, MatrixInfo, WorkbenchInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Info { inputs, mask } => {
            let mut matrices = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let matrix = app
                    .io_service()
                    .read_matrix(input)
                    .map_err(|error| error.to_string())?;
                let range = matrix.value_range();
                matrices.push(MatrixInfo {
                    source: input.display().to_string(),
                    dims: matrix.dims(),
                    missing: matrix.missing_count(),
                    min: range.map(|(min, _)| min),
                    max: range.map(|(_, max)| max),
                });
            }
            let mask_dims = matrices
                .iter()
                .map(|info| info.dims)
                .fold(GridDims::default(), GridDims::union);
            let mask = match mask {
                Some(path) => {
                    let mask = app
                        .io_service()
                        .read_mask(path)
                        .map_err(|error| error.to_string())?;
                    Some(app.mask_service().summarize(&mask))
                }
                None => None,
            };
            print_json(&WorkbenchInfo {
                matrices,
                mask_dims,
                mask,
            })?;
        }
        Commands::Replay {
            data,
            script,
            output,
            mask,
            config,
            report,
        } => {
            if data.len() > ViewId::ALL.len() {
                return Err(format!(
                    "at most {} data matrices are supported, got {}",
                    ViewId::ALL.len(),
                    data.len()
                ));
            }
            let config = match config {
                Some(path) => load_config(path).map_err(|error| error.to_string())?,
                None => SessionConfig::default(),
            };
            let mut workbench = Workbench::new(config);
            for (view, path) in ViewId::ALL.into_iter().zip(&data) {
                let matrix = app
                    .io_service()
                    .read_matrix(path)
                    .map_err(|error| error.to_string())?;
                workbench.load_matrix(view, matrix);
            }
            if let Some(path) = mask {
                let initial = app
                    .io_service()
                    .read_mask(path)
                    .map_err(|error| error.to_string())?;
                workbench.load_mask(initial);
            }

            let script = app
                .replay_service()
                .load(&script)
                .map_err(|error| error.to_string())?;
            let run_report = app
                .replay_service()
                .run(&script, &mut workbench)
                .map_err(|error| error.to_string())?;
            app.io_service()
                .write_mask(&output, workbench.mask(), workbench.mask_dims())
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.replay_service()
                    .save_report(report_path, &run_report)
                    .map_err(|error| error.to_string())?;
            }
            print_json(&run_report)?;
        }
        Commands::Diff { target, current } => {
            let target = app
                .io_service()
                .read_mask(&target)
                .map_err(|error| error.to_string())?;
            let current = app
                .io_service()
                .read_mask(&current)
                .map_err(|error| error.to_string())?;
            let diff = app.mask_service().diff(&target, &current);
            print_json(&DiffOutput {
                to_add: keys(&diff.to_add),
                to_remove: keys(&diff.to_remove),
            })?;
        }
    }

    Ok(())
}

fn keys(coords: &[GridCoord]) -> Vec<String> {
    coords
        .iter()
        .map(|coord| encode(*coord).to_string())
        .collect()
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
