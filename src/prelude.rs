//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use anillos::prelude::*;
//! ```

pub use crate::data::Dataset;
pub use crate::encoding::{encode_line, Sex};
pub use crate::error::{AnillosError, Result};
pub use crate::linear_model::LinearRegression;
pub use crate::metrics::{mae, mse, r_squared, rmse};
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Estimator;
