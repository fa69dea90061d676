//! Dataset assembly from raw abalone records.
//!
//! Turns raw comma-separated lines into the n×10 feature matrix and the
//! aligned ring-count target vector consumed by the solver. The whole
//! dataset is held in memory; abalone-sized inputs (a few thousand rows)
//! need no streaming.

use crate::encoding::{encode_line, FEATURE_LEN};
use crate::error::Result;
use crate::primitives::{Matrix, Vector};
use std::fs;
use std::path::Path;

/// An encoded dataset: feature matrix plus row-aligned targets.
///
/// # Examples
///
/// ```
/// use anillos::data::Dataset;
///
/// let lines = ["M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15"];
/// let ds = Dataset::from_lines(lines).unwrap();
/// assert_eq!(ds.n_samples(), 1);
/// assert_eq!(ds.features().shape(), (1, 10));
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Matrix<f64>,
    targets: Vector<f64>,
}

impl Dataset {
    /// Builds a dataset from raw record lines. Blank lines are skipped;
    /// line numbers in parse errors are 1-based over the input iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is malformed or non-numeric.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut x_data = Vec::new();
        let mut y_data = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let encoded = encode_line(line, idx + 1)?;
            x_data.extend_from_slice(&encoded.as_slice()[..FEATURE_LEN]);
            y_data.push(encoded[FEATURE_LEN]);
        }

        let n = y_data.len();
        let features = Matrix::from_vec(n, FEATURE_LEN, x_data)?;
        Ok(Self {
            features,
            targets: Vector::from_vec(y_data),
        })
    }

    /// Loads a dataset from a plain-text file, one record per line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error
    /// for a malformed record.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_lines(contents.lines())
    }

    /// Number of samples (rows).
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    /// The n×10 feature matrix (one-hot sex + 7 measurements per row).
    #[must_use]
    pub fn features(&self) -> &Matrix<f64> {
        &self.features
    }

    /// The ring-count targets, row-aligned with the feature matrix.
    #[must_use]
    pub fn targets(&self) -> &Vector<f64> {
        &self.targets
    }

    /// The feature vector of one sample.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn sample_features(&self, idx: usize) -> Vector<f64> {
        self.features.row(idx)
    }
}
