use std::collections::HashSet;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{CoreError, GridCoord, GridDims, decode, encode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskOp {
    Add,
    Remove,
}

/// Cells whose membership actually changed in one mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskChange {
    pub coordinates: Vec<GridCoord>,
    pub added: bool,
}

impl MaskChange {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaskDiff {
    pub to_add: Vec<GridCoord>,
    pub to_remove: Vec<GridCoord>,
}

impl MaskDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_add.len() + self.to_remove.len()
    }
}

/// The set of masked cells. Serialises as a sorted list of coordinate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Mask {
    cells: HashSet<GridCoord>,
}

impl Mask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = GridCoord> {
        self.cells.iter().copied()
    }

    /// Members in row-major order.
    pub fn sorted(&self) -> Vec<GridCoord> {
        let mut cells = self.cells.iter().copied().collect::<Vec<_>>();
        cells.sort_unstable();
        cells
    }

    /// Inserts every coordinate and returns the ones that were not already present.
    pub fn add(&mut self, coords: impl IntoIterator<Item = GridCoord>) -> Vec<GridCoord> {
        coords
            .into_iter()
            .filter(|coord| self.cells.insert(*coord))
            .collect()
    }

    /// Removes every coordinate and returns the ones that were present.
    pub fn remove(&mut self, coords: impl IntoIterator<Item = GridCoord>) -> Vec<GridCoord> {
        coords
            .into_iter()
            .filter(|coord| self.cells.remove(coord))
            .collect()
    }

    pub fn apply(&mut self, op: MaskOp, coords: impl IntoIterator<Item = GridCoord>) -> MaskChange {
        match op {
            MaskOp::Add => MaskChange {
                coordinates: self.add(coords),
                added: true,
            },
            MaskOp::Remove => MaskChange {
                coordinates: self.remove(coords),
                added: false,
            },
        }
    }

    /// Empties the mask and returns what it held, row-major.
    pub fn clear(&mut self) -> Vec<GridCoord> {
        let removed = self.sorted();
        self.cells.clear();
        removed
    }

    /// Members outside `dims` are dropped.
    pub fn to_dense(&self, dims: GridDims) -> Array2<bool> {
        let mut dense = Array2::from_elem((dims.rows, dims.cols), false);
        for coord in self.iter().filter(|coord| dims.contains(*coord)) {
            dense[[coord.row, coord.col]] = true;
        }
        dense
    }

    pub fn from_dense(matrix: &Array2<bool>) -> Self {
        matrix
            .indexed_iter()
            .filter(|(_, present)| **present)
            .map(|((row, col), _)| GridCoord::new(row, col))
            .collect()
    }

    /// `to_add = self - other`, `to_remove = other - self`: applying the diff to
    /// `other` yields a mask equal to `self`.
    pub fn diff(&self, other: &Mask) -> MaskDiff {
        let mut to_add = self.cells.difference(&other.cells).copied().collect::<Vec<_>>();
        let mut to_remove = other.cells.difference(&self.cells).copied().collect::<Vec<_>>();
        to_add.sort_unstable();
        to_remove.sort_unstable();
        MaskDiff { to_add, to_remove }
    }

    /// Brings this copy in line with `authoritative` and returns the delta that was applied.
    pub fn reconcile(&mut self, authoritative: &Mask) -> MaskDiff {
        if *self == *authoritative {
            return MaskDiff::default();
        }
        let diff = authoritative.diff(self);
        self.add(diff.to_add.iter().copied());
        self.remove(diff.to_remove.iter().copied());
        diff
    }

    pub fn keys(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|coord| encode(coord).to_string())
            .collect()
    }
}

impl FromIterator<GridCoord> for Mask {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<Mask> for Vec<String> {
    fn from(mask: Mask) -> Self {
        mask.keys()
    }
}

impl TryFrom<Vec<String>> for Mask {
    type Error = CoreError;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        keys.iter().map(|key| decode(key)).collect()
    }
}
