mod error;
mod execute;
mod io;
mod report;
mod script;


pub use error::{ReplayError, Result};
pub use execute::run_replay;
pub use io::{load_script, save_report};
pub use report::{ReplayReport, StepReport};
pub use script::ReplayScript;
