mod api;
mod codec;
mod data;
mod error;
mod mask_file;
mod util;

#[cfg(test)]
mod tests;

pub use api::{read_data_matrix, read_mask, supported_formats, write_mask};
pub use codec::{CsvCodec, MaskReader, MaskWriter, MatrixReader};
pub use data::{parse_cell, parse_data_matrix};
pub use error::{IoError, Result};
pub use mask_file::{parse_mask, render_mask};
