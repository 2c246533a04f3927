use std::path::{Path, PathBuf};

use ndarray::Array2;

use super::{CoreError, GridCoord, GridDims, Result};

/// A numeric matrix where `None` marks a cell that had no value in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMatrix {
    values: Array2<Option<f64>>,
    source: Option<PathBuf>,
}

impl DataMatrix {
    pub fn new(values: Array2<Option<f64>>) -> Result<Self> {
        if values.is_empty() {
            return Err(CoreError::EmptyMatrix);
        }
        Ok(Self {
            values,
            source: None,
        })
    }

    /// Builds a matrix from row vectors; short rows are padded with missing cells.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let len = height * width;
        let mut flat = Vec::with_capacity(len);
        for mut row in rows {
            row.resize(width, None);
            flat.extend(row);
        }
        let values = Array2::from_shape_vec((height, width), flat).map_err(|_| {
            CoreError::ShapeMismatch {
                rows: height,
                cols: width,
                len,
            }
        })?;
        Self::new(values)
    }

    pub fn with_source(mut self, path: impl AsRef<Path>) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn dims(&self) -> GridDims {
        let (rows, cols) = self.values.dim();
        GridDims::new(rows, cols)
    }

    pub fn get(&self, coord: GridCoord) -> Option<f64> {
        self.values.get([coord.row, coord.col]).copied().flatten()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }

    /// Smallest and largest present value; missing and NaN cells are skipped.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().flatten().copied().filter(|v| !v.is_nan());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        }))
    }
}
