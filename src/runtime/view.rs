use tracing::trace;

use crate::interaction::ViewId;
use crate::model::{DataMatrix, GridCoord, GridDims, Mask, MaskChange};

pub const DEFAULT_REPAINT_THRESHOLD: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepaintPlan {
    Nothing,
    /// Small batches repaint cell by cell.
    Cells(Vec<GridCoord>),
    Full,
}

/// One heatmap's matrix plus the mask cells it currently draws.
#[derive(Debug, Clone)]
pub struct HeatmapView {
    id: ViewId,
    matrix: Option<DataMatrix>,
    rendered: Mask,
    repaint_threshold: usize,
}

impl HeatmapView {
    pub fn new(id: ViewId, repaint_threshold: usize) -> Self {
        Self {
            id,
            matrix: None,
            rendered: Mask::new(),
            repaint_threshold,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn matrix(&self) -> Option<&DataMatrix> {
        self.matrix.as_ref()
    }

    /// 0x0 until a matrix is loaded.
    pub fn dims(&self) -> GridDims {
        self.matrix
            .as_ref()
            .map(DataMatrix::dims)
            .unwrap_or_default()
    }

    pub fn load_matrix(&mut self, matrix: DataMatrix) -> RepaintPlan {
        self.matrix = Some(matrix);
        RepaintPlan::Full
    }

    pub fn rendered_mask(&self) -> &Mask {
        &self.rendered
    }

    /// Masked cells beyond this view's own matrix are kept but not drawn.
    pub fn shows_mask_at(&self, coord: GridCoord) -> bool {
        self.dims().contains(coord) && self.rendered.contains(coord)
    }

    /// Reconciles the local copy against the authoritative mask.
    pub fn sync(&mut self, mask: &Mask) -> RepaintPlan {
        let diff = self.rendered.reconcile(mask);
        self.plan(diff.to_add.into_iter().chain(diff.to_remove))
    }

    pub fn apply_change(&mut self, change: &MaskChange) -> RepaintPlan {
        let cells = if change.added {
            self.rendered.add(change.coordinates.iter().copied())
        } else {
            self.rendered.remove(change.coordinates.iter().copied())
        };
        self.plan(cells.into_iter())
    }

    fn plan(&self, cells: impl Iterator<Item = GridCoord>) -> RepaintPlan {
        let dims = self.dims();
        let visible = cells
            .filter(|coord| dims.contains(*coord))
            .collect::<Vec<_>>();
        let plan = if visible.is_empty() {
            RepaintPlan::Nothing
        } else if visible.len() > self.repaint_threshold {
            RepaintPlan::Full
        } else {
            RepaintPlan::Cells(visible)
        };
        trace!(view = ?self.id, ?plan, "repaint planned");
        plan
    }
}
