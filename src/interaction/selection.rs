use rayon::prelude::*;

use crate::model::{GridCoord, GridDims};

use super::geometry::{
    Point, Rect, point_in_polygon, point_on_segment, polygon_edges, segment_touches_rect,
};

pub const MIN_POLYGON_VERTICES: usize = 3;

/// Half the side of the box tested around each cell centre.
const HALF_CELL: f64 = 0.5;

/// Point/drag strategy: emits a cell only when it differs from the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragStroke {
    last: Option<GridCoord>,
}

impl DragStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, cell: GridCoord) -> Option<GridCoord> {
        if self.last == Some(cell) {
            return None;
        }
        self.last = Some(cell);
        Some(cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectSelection {
    pub start: GridCoord,
    pub current: GridCoord,
}

impl RectSelection {
    pub fn new(start: GridCoord) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Returns whether the end corner moved.
    pub fn update(&mut self, cell: GridCoord) -> bool {
        let changed = self.current != cell;
        self.current = cell;
        changed
    }

    pub fn bounds(&self) -> (GridCoord, GridCoord) {
        (
            GridCoord::new(
                self.start.row.min(self.current.row),
                self.start.col.min(self.current.col),
            ),
            GridCoord::new(
                self.start.row.max(self.current.row),
                self.start.col.max(self.current.col),
            ),
        )
    }

    pub fn cells(&self, dims: GridDims) -> Vec<GridCoord> {
        rect_cells(self.start, self.current, dims)
    }
}

/// Every cell of the inclusive box spanned by two corners, clipped to `dims`, row-major.
pub fn rect_cells(a: GridCoord, b: GridCoord, dims: GridDims) -> Vec<GridCoord> {
    if dims.is_empty() {
        return Vec::new();
    }
    let min_row = a.row.min(b.row);
    let min_col = a.col.min(b.col);
    let max_row = a.row.max(b.row).min(dims.rows - 1);
    let max_col = a.col.max(b.col).min(dims.cols - 1);
    if min_row > max_row || min_col > max_col {
        return Vec::new();
    }
    (min_row..=max_row)
        .flat_map(|row| (min_col..=max_col).map(move |col| GridCoord::new(row, col)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexOutcome {
    Appended,
    /// The click landed on the first vertex.
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonSelection {
    vertices: Vec<GridCoord>,
}

impl PolygonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[GridCoord] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn push(&mut self, cell: GridCoord) -> VertexOutcome {
        if self.vertices.first() == Some(&cell) {
            return VertexOutcome::Closed;
        }
        self.vertices.push(cell);
        VertexOutcome::Appended
    }

    pub fn rasterize(&self, dims: GridDims) -> Vec<GridCoord> {
        rasterize_polygon(&self.vertices, dims)
    }
}

fn vertex_point(coord: GridCoord) -> Point {
    Point::new(coord.col as f64, coord.row as f64)
}

/// Cells covered by the polygon whose vertices sit at the given cell centres.
///
/// A cell is included when its centre is inside (even-odd rule) or when any edge
/// crosses the unit box around that centre, which picks up thin slivers the centre
/// test misses. Centres lying exactly on an edge count as hits: a 45 degree edge leaves
/// the box through two corners, which the strict crossing test does not report.
/// Fewer than three vertices yield nothing.
pub fn rasterize_polygon(vertices: &[GridCoord], dims: GridDims) -> Vec<GridCoord> {
    if vertices.len() < MIN_POLYGON_VERTICES || dims.is_empty() {
        return Vec::new();
    }

    // Only cells inside the vertex bounding box can be hit.
    let min_row = vertices.iter().map(|v| v.row).min().unwrap_or(0);
    let min_col = vertices.iter().map(|v| v.col).min().unwrap_or(0);
    let max_row = vertices.iter().map(|v| v.row).max().unwrap_or(0).min(dims.rows - 1);
    let max_col = vertices.iter().map(|v| v.col).max().unwrap_or(0).min(dims.cols - 1);
    if min_row > max_row || min_col > max_col {
        return Vec::new();
    }

    let points = vertices.iter().copied().map(vertex_point).collect::<Vec<_>>();
    let points = points.as_slice();
    (min_row..=max_row)
        .into_par_iter()
        .flat_map_iter(move |row| {
            (min_col..=max_col)
                .map(move |col| GridCoord::new(row, col))
                .filter(move |cell| cell_hits_polygon(*cell, points))
        })
        .collect()
}

fn cell_hits_polygon(cell: GridCoord, points: &[Point]) -> bool {
    let center = vertex_point(cell);
    if point_in_polygon(center, points) {
        return true;
    }
    let bounds = Rect::from_center(center, HALF_CELL);
    polygon_edges(points)
        .any(|(a, b)| point_on_segment(center, a, b) || segment_touches_rect(a, b, &bounds))
}
