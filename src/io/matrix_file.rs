//! Plain-text transition matrix parsing

use crate::io::configuration::COMMENT_MARKER;
use crate::io::error::{ErgodicError, Result, WithPath, parse_error};
use ndarray::Array2;
use std::path::Path;

/// Parse a matrix written one row per line
///
/// Entries are separated by commas and/or whitespace. Blank lines and
/// anything after `#` are ignored.
///
/// # Errors
///
/// Returns a parse error if an entry is not a number, rows differ in length,
/// or no rows are present
pub fn parse_matrix(text: &str) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = raw_line
            .split_once(COMMENT_MARKER)
            .map_or(raw_line, |(before, _)| before);

        let row = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|error| parse_error(line_number, &format!("'{token}': {error}")))
            })
            .collect::<Result<Vec<f64>>>()?;

        if row.is_empty() {
            continue;
        }

        match columns {
            None => columns = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(parse_error(
                    line_number,
                    &format!("row has {} entries, expected {expected}", row.len()),
                ));
            }
            Some(_) => {}
        }

        values.extend(row);
        rows += 1;
    }

    let columns = columns.ok_or_else(|| parse_error(0, &"no matrix rows found"))?;

    Array2::from_shape_vec((rows, columns), values)
        .map_err(|error| parse_error(0, &error))
}

/// Read and parse a matrix file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn read_matrix(path: &Path) -> Result<Array2<f64>> {
    let text = std::fs::read_to_string(path).map_err(|source| ErgodicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read matrix",
        source,
    })?;

    parse_matrix(&text).with_path(path)
}
