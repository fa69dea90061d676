//! Core compute primitives (Vector, Matrix).
//!
//! These types carry the dense design matrix and coefficient vectors used
//! by the least-squares fitting pipeline.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
