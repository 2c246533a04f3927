use serde::Serialize;

use crate::model::GridCoord;

use super::events::ViewId;
use super::geometry::{Point, Rect};
use super::selection::RectSelection;
use super::transform::{GridLayout, ViewTransform};

/// Selection graphics in device coordinates, drawn over one heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Overlay {
    Rectangle { view: ViewId, bounds: Rect },
    /// Open polyline through the pending vertices, one marker per vertex.
    Polygon { view: ViewId, vertices: Vec<Point> },
}

impl Overlay {
    pub fn rectangle(
        view: ViewId,
        layout: &GridLayout,
        transform: &ViewTransform,
        selection: &RectSelection,
    ) -> Self {
        let (min, max) = selection.bounds();
        let bounds = layout
            .grid_to_device(transform, min)
            .union(&layout.grid_to_device(transform, max));
        Self::Rectangle { view, bounds }
    }

    pub fn polygon(
        view: ViewId,
        layout: &GridLayout,
        transform: &ViewTransform,
        vertices: &[GridCoord],
    ) -> Self {
        Self::Polygon {
            view,
            vertices: vertices
                .iter()
                .map(|vertex| layout.cell_center_to_device(transform, *vertex))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OverlayUpdate {
    Draw { overlay: Overlay },
    Clear,
}
