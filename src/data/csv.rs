//! Reader for comma-separated numeric tables.
//!
//! Format:
//! - UTF-8, one row per line, cells separated by commas
//! - every cell parses as `f64` (scientific notation is fine)
//! - blank lines are skipped
//! - an optional header row is skipped when none of its cells is numeric
//! - every row must have the same number of cells as the first data row

use std::fs;
use std::path::Path;

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Reads a numeric table from `path` into an `N × D` matrix.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_matrix(&text).map_err(|e| match e {
        NetError::Dataset(msg) => NetError::Dataset(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Reads a one-column table of labels.
pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let table = read_matrix(path)?;
    if table.cols != 1 {
        return Err(NetError::Dataset(format!(
            "{}: label file must have exactly one column, found {}",
            path.display(),
            table.cols
        )));
    }
    Ok(table.to_column_vec())
}

/// Parses CSV text into a rectangular matrix.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_idx, line) in lines {
        let row = parse_row(line, line_idx + 1)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(NetError::Dataset(format!(
                    "line {}: {} columns, expected {}",
                    line_idx + 1,
                    row.len(),
                    first.len()
                )));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(NetError::Dataset("no data rows".into()));
    }

    Ok(Matrix::from_data(rows))
}

/// A row is a header only if it has text and no cell parses as a number, so a
/// data row with one corrupt cell is reported rather than skipped.
fn is_header(line: &str) -> bool {
    let mut cells = line.split(',').map(str::trim).filter(|c| !c.is_empty()).peekable();
    cells.peek().is_some() && cells.all(|c| c.parse::<f64>().is_err())
}

fn parse_row(line: &str, line_num: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|cell| {
            let t = cell.trim();
            t.parse::<f64>().map_err(|_| {
                NetError::Dataset(format!("line {}: '{}' is not a valid number", line_num, t))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numpy_style_output() {
        let text = "0.000000000000000000e+00,1.5e-01\n2.5e+00,-3.0e+00\n";
        let m = parse_matrix(text).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.data[0], vec![0.0, 0.15]);
        assert_eq!(m.data[1], vec![2.5, -3.0]);
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let m = parse_matrix("a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_matrix("1,2,3\n4,5\n").unwrap_err();
        match err {
            NetError::Dataset(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn corrupt_first_row_is_not_taken_for_a_header() {
        match parse_matrix("1,x\n2,3\n") {
            Err(NetError::Dataset(msg)) => assert!(msg.contains("line 1"), "{msg}"),
            other => panic!("expected dataset error, got {other:?}"),
        }
    }

    #[test]
    fn bad_cell_is_reported() {
        assert!(matches!(parse_matrix("1,2\n3,x\n"), Err(NetError::Dataset(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_matrix("\n\n"), Err(NetError::Dataset(_))));
    }
}
