use serde::{Deserialize, Serialize};

use crate::model::{GridCoord, GridDims};

use super::geometry::{Point, Rect};

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 10.0;

pub fn clamp_scale(k: f64) -> f64 {
    if k.is_nan() {
        return 1.0;
    }
    k.clamp(MIN_SCALE, MAX_SCALE)
}

/// Pan and uniform zoom: `device = content * k + (x, y)`, relative to the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformParts")]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

/// Unchecked wire form; deserialising goes through [`ViewTransform::new`].
#[derive(Deserialize)]
struct TransformParts {
    x: f64,
    y: f64,
    k: f64,
}

impl From<TransformParts> for ViewTransform {
    fn from(parts: TransformParts) -> Self {
        Self::new(parts.x, parts.y, parts.k)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    pub fn new(x: f64, y: f64, k: f64) -> Self {
        Self {
            x,
            y,
            k: clamp_scale(k),
        }
    }

    pub fn apply(&self, content: Point) -> Point {
        Point::new(content.x * self.k + self.x, content.y * self.k + self.y)
    }

    pub fn invert(&self, local: Point) -> Point {
        Point::new((local.x - self.x) / self.k, (local.y - self.y) / self.k)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            k: self.k,
        }
    }

    /// Rescales by `factor` keeping the content under `anchor` (viewport-local) in place.
    pub fn zoomed_at(&self, anchor: Point, factor: f64) -> Self {
        let k = clamp_scale(self.k * factor);
        let content = self.invert(anchor);
        Self {
            x: anchor.x - content.x * k,
            y: anchor.y - content.y * k,
            k,
        }
    }
}

/// Where one heatmap's grid sits on screen before the transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub viewport: Rect,
    pub dims: GridDims,
    pub cell_size: f64,
}

impl GridLayout {
    pub fn new(viewport: Rect, dims: GridDims, cell_size: f64) -> Self {
        Self {
            viewport,
            dims,
            cell_size,
        }
    }

    pub fn grid_size(&self) -> (f64, f64) {
        (
            self.dims.cols as f64 * self.cell_size,
            self.dims.rows as f64 * self.cell_size,
        )
    }

    /// Grids smaller than the viewport are centred; larger ones start at the origin.
    pub fn centering_offset(&self) -> Point {
        let (width, height) = self.grid_size();
        Point::new(
            ((self.viewport.width - width) / 2.0).max(0.0),
            ((self.viewport.height - height) / 2.0).max(0.0),
        )
    }

    pub fn to_local(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.viewport.x, pointer.y - self.viewport.y)
    }

    pub fn device_to_grid(&self, transform: &ViewTransform, pointer: Point) -> Option<GridCoord> {
        let content = transform.invert(self.to_local(pointer));
        let offset = self.centering_offset();
        let gx = (content.x - offset.x) / self.cell_size;
        let gy = (content.y - offset.y) / self.cell_size;
        if !gx.is_finite() || !gy.is_finite() || gx < 0.0 || gy < 0.0 {
            return None;
        }
        let coord = GridCoord::new(gy.floor() as usize, gx.floor() as usize);
        self.dims.contains(coord).then_some(coord)
    }

    pub fn grid_to_device(&self, transform: &ViewTransform, coord: GridCoord) -> Rect {
        let offset = self.centering_offset();
        let min = transform.apply(Point::new(
            offset.x + coord.col as f64 * self.cell_size,
            offset.y + coord.row as f64 * self.cell_size,
        ));
        let extent = self.cell_size * transform.k;
        Rect::new(
            self.viewport.x + min.x,
            self.viewport.y + min.y,
            extent,
            extent,
        )
    }

    pub fn cell_center_to_device(&self, transform: &ViewTransform, coord: GridCoord) -> Point {
        self.grid_to_device(transform, coord).center()
    }
}
