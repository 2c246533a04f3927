use serde::Serialize;

use crate::model::{GridCoord, Mask, MaskDiff};

/// Bounding box and size of a mask, as printed by `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskSummary {
    pub cells: usize,
    pub min: Option<GridCoord>,
    pub max: Option<GridCoord>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MaskService;

impl MaskService {
    /// Cells to add to and remove from `current` so it equals `target`.
    pub fn diff(&self, target: &Mask, current: &Mask) -> MaskDiff {
        target.diff(current)
    }

    pub fn summarize(&self, mask: &Mask) -> MaskSummary {
        let bounds = mask.iter().fold(None, |acc: Option<(GridCoord, GridCoord)>, cell| {
            Some(match acc {
                None => (cell, cell),
                Some((min, max)) => (
                    GridCoord::new(min.row.min(cell.row), min.col.min(cell.col)),
                    GridCoord::new(max.row.max(cell.row), max.col.max(cell.col)),
                ),
            })
        });
        MaskSummary {
            cells: mask.len(),
            min: bounds.map(|(min, _)| min),
            max: bounds.map(|(_, max)| max),
        }
    }
}
