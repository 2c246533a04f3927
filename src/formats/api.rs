use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::model::{DataMatrix, GridDims, Mask};

use super::util::ensure_supported;
use super::{Result, parse_data_matrix, parse_mask, render_mask};

pub fn read_data_matrix(path: impl AsRef<Path>) -> Result<DataMatrix> {
    let path = path.as_ref();
    ensure_supported(path)?;
    let content = fs::read_to_string(path)?;
    let matrix = parse_data_matrix(&content)?.with_source(path);
    let dims = matrix.dims();
    info!(path = %path.display(), rows = dims.rows, cols = dims.cols, "loaded data matrix");
    Ok(matrix)
}

pub fn read_mask(path: impl AsRef<Path>) -> Result<Mask> {
    let path = path.as_ref();
    ensure_supported(path)?;
    let content = fs::read_to_string(path)?;
    let mask = parse_mask(&content)?;
    info!(path = %path.display(), cells = mask.len(), "loaded mask");
    Ok(mask)
}

pub fn write_mask(path: impl AsRef<Path>, mask: &Mask, dims: GridDims) -> Result<()> {
    let path = path.as_ref();
    ensure_supported(path)?;
    let outside = mask.iter().filter(|coord| !dims.contains(*coord)).count();
    if outside > 0 {
        warn!(outside, rows = dims.rows, cols = dims.cols, "mask cells beyond grid not written");
    }
    fs::write(path, render_mask(mask, dims)?)?;
    debug!(path = %path.display(), rows = dims.rows, cols = dims.cols, "wrote mask");
    Ok(())
}

pub fn supported_formats() -> &'static [&'static str] {
    &["csv", "txt"]
}
