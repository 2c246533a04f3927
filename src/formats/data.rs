use crate::model::DataMatrix;

use super::util::{csv_reader, record_row};
use super::{IoError, Result};

/// Parses one token. Empty (after trimming) means "no value"; `"0"` is the number zero.
pub fn parse_cell(token: &str) -> Option<Option<f64>> {
    let token = token.trim();
    if token.is_empty() {
        return Some(None);
    }
    token.parse::<f64>().ok().map(Some)
}

pub fn parse_data_matrix(content: &str) -> Result<DataMatrix> {
    let mut reader = csv_reader(content);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record_row(&record, rows.len());
        // Blank lines become rows with no values.
        rows.resize(row.max(rows.len()), Vec::new());
        let values = record
            .iter()
            .enumerate()
            .map(|(col, token)| {
                parse_cell(token).ok_or_else(|| IoError::InvalidNumber {
                    row,
                    col,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(values);
    }
    Ok(DataMatrix::from_rows(rows)?)
}
