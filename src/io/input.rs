//! Interactive input for `eval` when coordinates are not given on the command line.

use std::io::{BufRead, Write};

use crate::error::AppError;

pub const PROMPT: &str = "Enter x, y, z: ";

/// Prompt on `out` and read three whitespace-separated numbers from `input`.
///
/// Numbers may span several lines. Commas are accepted as separators.
pub fn prompt_triple<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<(f64, f64, f64), AppError> {
    write!(out, "{PROMPT}").map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;
    out.flush().map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

    let mut values = Vec::with_capacity(3);
    let mut line = String::new();
    while values.len() < 3 {
        line.clear();
        let n = input
            .read_line(&mut line)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if n == 0 {
            return Err(AppError::new(2, format!("Expected 3 numbers, got {}.", values.len())));
        }
        for token in line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
            let v: f64 = token
                .parse()
                .map_err(|_| AppError::new(2, format!("Not a number: {token:?}")))?;
            values.push(v);
            if values.len() == 3 {
                break;
            }
        }
    }

    Ok((values[0], values[1], values[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_numbers_across_lines() {
        let mut out = Vec::new();
        let v = prompt_triple("1.5\n-2\n  3e1 trailing\n".as_bytes(), &mut out).unwrap();
        assert_eq!(v, (1.5, -2.0, 30.0));
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn accepts_commas() {
        let v = prompt_triple("1, 2, 3\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(v, (1.0, 2.0, 3.0));
    }

    #[test]
    fn rejects_short_or_bad_input() {
        let err = prompt_triple("1 2\n".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(prompt_triple("1 two 3\n".as_bytes(), Vec::new()).is_err());
    }
}
