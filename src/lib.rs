//! Anillos: abalone ring-count regression in pure Rust.
//!
//! Fits a linear model predicting abalone age (ring count) from physical
//! measurements using least-squares regression. One categorical field (sex)
//! is one-hot encoded alongside seven numeric measurements; the fitted
//! coefficients are then applied per sample for reporting.
//!
//! # Quick Start
//!
//! ```
//! use anillos::prelude::*;
//!
//! let lines = [
//!     "M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15",
//!     "F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9",
//!     "I,0.33,0.255,0.08,0.205,0.0895,0.0395,0.055,7",
//! ];
//! let dataset = Dataset::from_lines(lines).unwrap();
//!
//! let mut model = LinearRegression::new();
//! model.fit(dataset.features(), dataset.targets()).unwrap();
//!
//! // 10 feature weights + 1 bias weight, bias last
//! assert_eq!(model.coefficient_vector().len(), 11);
//! let estimate = model.predict_one(&dataset.sample_features(0)).unwrap();
//! assert!(estimate.is_finite());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`encoding`]: Sex one-hot encoding and record parsing
//! - [`data`]: Dataset assembly and file loading
//! - [`linear_model`]: Least-squares linear regression
//! - [`metrics`]: Regression evaluation metrics
//! - [`error`]: Error type and Result alias

pub mod data;
pub mod encoding;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{AnillosError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Estimator;
