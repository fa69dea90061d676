//! Error types for anillos operations.
//!
//! Every failure in the pipeline surfaces as an [`AnillosError`]; nothing is
//! recovered locally (the computation is batch and single-shot).

use std::fmt;

/// Main error type for anillos operations.
///
/// # Examples
///
/// ```
/// use anillos::error::AnillosError;
///
/// let err = AnillosError::DimensionMismatch {
///     expected: "10 features".to_string(),
///     actual: "9".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AnillosError {
    /// A record field could not be converted to a number.
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Field name (e.g. "length", "rings").
        field: String,
        /// Offending text.
        value: String,
    },

    /// Fit was attempted on zero samples.
    EmptyDataset,

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The Gram matrix is singular (not positive definite).
    SingularMatrix,

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AnillosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnillosError::Parse { line, field, value } => {
                write!(
                    f,
                    "Parse error at line {line}: field '{field}' is not numeric: '{value}'"
                )
            }
            AnillosError::EmptyDataset => {
                write!(f, "Empty dataset: cannot fit with zero samples")
            }
            AnillosError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            AnillosError::SingularMatrix => {
                write!(
                    f,
                    "Singular matrix: normal equations are not positive definite"
                )
            }
            AnillosError::Io(e) => write!(f, "I/O error: {e}"),
            AnillosError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AnillosError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnillosError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnillosError {
    fn from(err: std::io::Error) -> Self {
        AnillosError::Io(err)
    }
}

impl From<&str> for AnillosError {
    fn from(msg: &str) -> Self {
        AnillosError::Other(msg.to_string())
    }
}

impl From<String> for AnillosError {
    fn from(msg: String) -> Self {
        AnillosError::Other(msg)
    }
}

impl AnillosError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a parse error for a named field.
    #[must_use]
    pub fn parse(line: usize, field: &str, value: &str) -> Self {
        Self::Parse {
            line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AnillosError>;
