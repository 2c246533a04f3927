use std::fs;

use tempfile::tempdir;

use super::{
    IoError, parse_cell, parse_data_matrix, parse_mask, read_data_matrix, read_mask, render_mask,
    write_mask,
};
use crate::model::{GridCoord, GridDims, Mask};

#[test]
fn zero_and_empty_tokens_stay_distinct() {
    assert_eq!(parse_cell("0"), Some(Some(0.0)));
    assert_eq!(parse_cell("  "), Some(None));
    assert_eq!(parse_cell(""), Some(None));
    assert_eq!(parse_cell(" -1.5e2 "), Some(Some(-150.0)));
    assert_eq!(parse_cell("abc"), None);
}

#[test]
fn data_matrix_parses_missing_cells() {
    let matrix = parse_data_matrix("1,,3\n0,5\n").expect("parse data");
    assert_eq!(matrix.dims(), GridDims::new(2, 3));
    assert_eq!(matrix.get(GridCoord::new(0, 1)), None);
    assert_eq!(matrix.get(GridCoord::new(1, 0)), Some(0.0));
    assert_eq!(matrix.get(GridCoord::new(1, 2)), None);
    assert_eq!(matrix.missing_count(), 2);
}

#[test]
fn data_matrix_rejects_non_numeric_tokens() {
    let err = parse_data_matrix("1,2\n3,oops\n").expect_err("must fail");
    match err {
        IoError::InvalidNumber { row, col, token } => {
            assert_eq!((row, col), (1, 1));
            assert_eq!(token, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_data_file_is_an_error() {
    assert!(parse_data_matrix("").is_err());
}

#[test]
fn mask_parsing_treats_anything_but_one_as_absent() {
    let mask = parse_mask("0, 1 ,x\n1,,2\n").expect("parse mask");
    assert_eq!(mask.sorted(), vec![GridCoord::new(0, 1), GridCoord::new(1, 0)]);
}

#[test]
fn mask_rendering_uses_requested_dims() {
    let mask: Mask = [GridCoord::new(0, 2), GridCoord::new(1, 0), GridCoord::new(7, 7)]
        .into_iter()
        .collect();
    let text = render_mask(&mask, GridDims::new(2, 3)).expect("render");
    assert_eq!(text, "0,0,1\n1,0,0\n");
}

#[test]
fn mask_file_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("mask.csv");
    let mask: Mask = [GridCoord::new(0, 0), GridCoord::new(2, 1)]
        .into_iter()
        .collect();
    write_mask(&path, &mask, GridDims::new(3, 2)).expect("write mask");
    let restored = read_mask(&path).expect("read mask");
    assert_eq!(restored, mask);
}

#[test]
fn data_file_records_source() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("left.csv");
    fs::write(&path, "1,2\n3,4\n").expect("write data");
    let matrix = read_data_matrix(&path).expect("read data");
    assert_eq!(matrix.source(), Some(path.as_path()));
    assert_eq!(matrix.value_range(), Some((1.0, 4.0)));
}

#[test]
fn unsupported_extension_errors() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("mask.png");
    let err = write_mask(&path, &Mask::new(), GridDims::new(1, 1)).expect_err("must fail");
    assert!(err.to_string().contains("unsupported file format"));
}

#[test]
fn blank_lines_keep_their_row_in_data_matrices() {
    let matrix = parse_data_matrix("1\n\n3\n").expect("parse data");
    assert_eq!(matrix.dims(), GridDims::new(3, 1));
    assert_eq!(matrix.get(GridCoord::new(0, 0)), Some(1.0));
    assert_eq!(matrix.get(GridCoord::new(1, 0)), None);
    assert_eq!(matrix.get(GridCoord::new(2, 0)), Some(3.0));
    assert_eq!(matrix.missing_count(), 1);
}

#[test]
fn invalid_number_after_blank_line_reports_file_row() {
    let err = parse_data_matrix("1,2\n\nx,4\n").expect_err("must fail");
    assert!(matches!(err, IoError::InvalidNumber { row: 2, col: 0, .. }));
}

#[test]
fn blank_lines_keep_their_row_in_masks() {
    let mask = parse_mask("1\n\n1\n").expect("parse mask");
    assert_eq!(mask.sorted(), vec![GridCoord::new(0, 0), GridCoord::new(2, 0)]);
}
