use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

const KEY_SEPARATOR: char = ',';

/// A (row, column) pair identifying one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn key(self) -> CoordKey {
        encode(self)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Element-wise maximum, used to size a mask shared by two matrices.
    pub fn union(self, other: Self) -> Self {
        Self {
            rows: self.rows.max(other.rows),
            cols: self.cols.max(other.cols),
        }
    }
}

/// Canonical string form of a [`GridCoord`]: `"<row>,<col>"` in base-10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordKey(String);

impl CoordKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn coord(&self) -> Result<GridCoord> {
        decode(&self.0)
    }
}

impl fmt::Display for CoordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CoordKey {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self> {
        decode(raw).map(encode)
    }
}

impl From<GridCoord> for CoordKey {
    fn from(coord: GridCoord) -> Self {
        encode(coord)
    }
}

pub fn encode(coord: GridCoord) -> CoordKey {
    CoordKey(format!("{}{KEY_SEPARATOR}{}", coord.row, coord.col))
}

pub fn decode(raw: &str) -> Result<GridCoord> {
    let malformed = || CoreError::MalformedKey(raw.to_string());
    let (row, col) = raw.split_once(KEY_SEPARATOR).ok_or_else(malformed)?;
    let row = parse_component(row).ok_or_else(malformed)?;
    let col = parse_component(col).ok_or_else(malformed)?;
    Ok(GridCoord::new(row, col))
}

// `usize::from_str` accepts a leading `+`; keys are digits only.
fn parse_component(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
