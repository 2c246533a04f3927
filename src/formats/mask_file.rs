use crate::model::{GridCoord, GridDims, Mask};

use super::Result;
use super::util::{csv_reader, record_row};

const PRESENT: &str = "1";
const ABSENT: &str = "0";

/// Every `1` token (after trimming) marks its cell; any other token is treated as absent.
pub fn parse_mask(content: &str) -> Result<Mask> {
    let mut reader = csv_reader(content);
    let mut mask = Mask::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = record_row(&record, index);
        mask.add(
            record
                .iter()
                .enumerate()
                .filter(|(_, token)| token.trim() == PRESENT)
                .map(|(col, _)| GridCoord::new(row, col)),
        );
    }
    Ok(mask)
}

/// Dense `0`/`1` rows at `dims`; members outside `dims` are dropped.
pub fn render_mask(mask: &Mask, dims: GridDims) -> Result<String> {
    let dense = mask.to_dense(dims);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in dense.rows() {
        writer.write_record(row.iter().map(|present| if *present { PRESENT } else { ABSENT }))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
