//! Utility functions for reading from [`stdin`](std::io::stdin).

use eyre::Result;
use std::io::{self, BufRead};

/// Returns `names` as bytes, or the non-empty lines of stdin when `names` is empty.
pub fn unwrap_names(names: &[String]) -> Result<Vec<Vec<u8>>> {
    if !names.is_empty() {
        return Ok(names.iter().map(|name| name.as_bytes().to_vec()).collect());
    }
    read_lines(io::stdin().lock())
}

/// Splits `reader` into lines without their line terminator, skipping blank lines.
///
/// Lines are kept as bytes so that invalid UTF-8 is reported per name.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<Vec<u8>>> {
    let mut names = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if !line.is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}
