//! Scalar threshold files written by the independent-set search

use crate::io::error::{Result, data_read_error};
use std::path::Path;

/// Read the single threshold value stored in `path`
///
/// # Errors
///
/// Returns [`ComposeError::DataRead`](crate::ComposeError::DataRead) if the file
/// cannot be read or does not hold exactly one finite, non-negative number
pub fn read_threshold(path: &Path) -> Result<f64> {
    let contents = std::fs::read_to_string(path).map_err(|e| data_read_error(path, &e))?;
    parse_threshold(&contents).map_err(|reason| data_read_error(path, &reason))
}

/// Parse threshold file contents
///
/// Values are whitespace separated and `#` starts a comment running to the end
/// of the line. Exactly one value must remain.
///
/// # Errors
///
/// Returns a description of the problem when the contents are empty, hold more
/// than one value, or the value is not a finite non-negative number
pub fn parse_threshold(contents: &str) -> std::result::Result<f64, String> {
    let mut tokens = contents
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
        .flat_map(str::split_whitespace);

    let Some(token) = tokens.next() else {
        return Err("file contains no value".to_string());
    };

    let extra = tokens.count();
    if extra > 0 {
        return Err(format!("expected a single value, found {}", extra + 1));
    }

    let value: f64 = token
        .parse()
        .map_err(|e| format!("'{token}' is not a number: {e}"))?;

    if !value.is_finite() {
        return Err(format!("'{token}' is not finite"));
    }
    if value < 0.0 {
        return Err(format!("'{token}' is negative"));
    }

    Ok(value)
}
