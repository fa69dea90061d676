//! Feature encoding for raw abalone records.
//!
//! A raw record is one comma-separated line with 9 fields: a sex code,
//! seven physical measurements, and the ring count (the regression target).
//! Encoding maps the sex code to a one-of-n vector and parses the numeric
//! fields, producing an 11-component encoded sample:
//!
//! ```text
//! [one-hot(sex) x3, 7 measurements, rings]
//! ```
//!
//! # Example
//!
//! ```
//! use anillos::encoding::encode_line;
//!
//! let sample = encode_line("M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15", 1).unwrap();
//! assert_eq!(sample.as_slice()[..3], [0.0, 1.0, 0.0]);
//! assert_eq!(sample.as_slice()[10], 15.0);
//! ```

use crate::error::{AnillosError, Result};
use crate::primitives::Vector;

/// Number of sex categories (one-hot width).
pub const N_CATEGORIES: usize = 3;

/// Number of physical measurements per record.
pub const N_MEASUREMENTS: usize = 7;

/// Length of the feature portion of an encoded sample (one-hot + measurements).
pub const FEATURE_LEN: usize = N_CATEGORIES + N_MEASUREMENTS;

/// Length of a full encoded sample (features + target).
pub const ENCODED_LEN: usize = FEATURE_LEN + 1;

/// Field names of the 8 numeric fields, used in parse diagnostics.
const NUMERIC_FIELDS: [&str; 8] = [
    "length",
    "diameter",
    "height",
    "whole_weight",
    "shucked_weight",
    "viscera_weight",
    "shell_weight",
    "rings",
];

/// Sex of an abalone, the single categorical field of a record.
///
/// The mapping from codes is total: `F` and `M` are recognized explicitly
/// and every other code falls through to `Infant`. The upstream data format
/// uses `I` for infants; the fallback deliberately absorbs unrecognized
/// codes as well instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    Infant,
}

impl Sex {
    /// Parses a sex code. Never fails: anything that is not `F` or `M`
    /// is treated as `Infant`.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "F" => Sex::Female,
            "M" => Sex::Male,
            _ => Sex::Infant,
        }
    }

    /// One-of-n encoding: F = [1,0,0], M = [0,1,0], I = [0,0,1].
    #[must_use]
    pub fn one_hot(self) -> [f64; N_CATEGORIES] {
        match self {
            Sex::Female => [1.0, 0.0, 0.0],
            Sex::Male => [0.0, 1.0, 0.0],
            Sex::Infant => [0.0, 0.0, 1.0],
        }
    }
}

/// Encodes one raw record into an 11-component sample.
///
/// `line_no` is the 1-based line number, used only for diagnostics.
///
/// # Errors
///
/// Returns an error if the record does not have exactly 9 comma-separated
/// fields or if any numeric field fails to parse.
pub fn encode_line(line: &str, line_no: usize) -> Result<Vector<f64>> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != N_MEASUREMENTS + 2 {
        return Err(AnillosError::Other(format!(
            "line {line_no}: expected 9 comma-separated fields, got {}",
            fields.len()
        )));
    }

    let mut encoded = Vec::with_capacity(ENCODED_LEN);
    encoded.extend_from_slice(&Sex::parse(fields[0].trim()).one_hot());

    for (field, name) in fields[1..].iter().zip(NUMERIC_FIELDS) {
        let value: f64 = field
            .trim()
            .parse()
            .map_err(|_| AnillosError::parse(line_no, name, field.trim()))?;
        encoded.push(value);
    }

    Ok(Vector::from_vec(encoded))
}
