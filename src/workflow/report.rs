use serde::{Deserialize, Serialize};

use crate::interaction::{InteractionState, ViewTransform};
use crate::model::GridDims;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub index: usize,
    pub event: String,
    pub cells_added: usize,
    pub cells_removed: usize,
    /// Shared transform once the event was handled.
    pub transform: ViewTransform,
    pub duration_us: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayReport {
    pub script_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub mask_cells: usize,
    pub mask_dims: GridDims,
    pub transform: ViewTransform,
    pub interaction: InteractionState,
    /// Vertices of a polygon left open at the end of the script.
    pub pending_vertices: usize,
}

impl ReplayReport {
    pub fn total_added(&self) -> usize {
        self.steps.iter().map(|step| step.cells_added).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.steps.iter().map(|step| step.cells_removed).sum()
    }
}
