use std::path::Path;

use crate::model::{DataMatrix, GridDims, Mask};

use super::{Result, read_data_matrix, read_mask, supported_formats, write_mask};

pub trait MatrixReader {
    fn supports_extension(&self, extension: &str) -> bool;
    fn read_matrix(&self, path: &Path) -> Result<DataMatrix>;
}

pub trait MaskReader {
    fn supports_extension(&self, extension: &str) -> bool;
    fn read_mask(&self, path: &Path) -> Result<Mask>;
}

pub trait MaskWriter {
    fn supports_extension(&self, extension: &str) -> bool;
    fn write_mask(&self, path: &Path, mask: &Mask, dims: GridDims) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvCodec;

impl MatrixReader for CsvCodec {
    fn supports_extension(&self, extension: &str) -> bool {
        supported_formats().contains(&extension)
    }

    fn read_matrix(&self, path: &Path) -> Result<DataMatrix> {
        read_data_matrix(path)
    }
}

impl MaskReader for CsvCodec {
    fn supports_extension(&self, extension: &str) -> bool {
        supported_formats().contains(&extension)
    }

    fn read_mask(&self, path: &Path) -> Result<Mask> {
        read_mask(path)
    }
}

impl MaskWriter for CsvCodec {
    fn supports_extension(&self, extension: &str) -> bool {
        supported_formats().contains(&extension)
    }

    fn write_mask(&self, path: &Path, mask: &Mask, dims: GridDims) -> Result<()> {
        write_mask(path, mask, dims)
    }
}
