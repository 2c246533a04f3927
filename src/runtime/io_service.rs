use std::path::Path;

use crate::formats::{CsvCodec, IoError, MaskReader, MaskWriter, MatrixReader};
use crate::model::{DataMatrix, GridDims, Mask};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService {
    codec: CsvCodec,
}

impl IoService {
    pub fn read_matrix(&self, path: impl AsRef<Path>) -> Result<DataMatrix> {
        let path = path.as_ref();
        check_extension(path, |ext| MatrixReader::supports_extension(&self.codec, ext))?;
        Ok(self.codec.read_matrix(path)?)
    }

    pub fn read_mask(&self, path: impl AsRef<Path>) -> Result<Mask> {
        let path = path.as_ref();
        check_extension(path, |ext| MaskReader::supports_extension(&self.codec, ext))?;
        Ok(self.codec.read_mask(path)?)
    }

    pub fn write_mask(&self, path: impl AsRef<Path>, mask: &Mask, dims: GridDims) -> Result<()> {
        let path = path.as_ref();
        check_extension(path, |ext| MaskWriter::supports_extension(&self.codec, ext))?;
        self.codec.write_mask(path, mask, dims)?;
        Ok(())
    }
}

fn check_extension(path: &Path, supports: impl Fn(&str) -> bool) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if supports(&extension) {
        Ok(())
    } else {
        Err(IoError::UnsupportedFormat(path.display().to_string()).into())
    }
}
