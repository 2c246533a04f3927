use std::path::Path;

use crate::workflow::{ReplayReport, ReplayScript, load_script, run_replay, save_report};

use super::{Result, Workbench};

#[derive(Debug, Default, Clone, Copy)]
pub struct ReplayService;

impl ReplayService {
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ReplayScript> {
        Ok(load_script(path)?)
    }

    pub fn run(&self, script: &ReplayScript, workbench: &mut Workbench) -> Result<ReplayReport> {
        Ok(run_replay(script, workbench)?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &ReplayReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }
}
