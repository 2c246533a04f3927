pub mod cli;
pub mod formats;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod workflow;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
