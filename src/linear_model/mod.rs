//! Linear models for regression.
//!
//! Includes Ordinary Least Squares (OLS) linear regression.

use crate::error::{AnillosError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed targets and predicted targets:
///
/// ```text
/// y = X β + ε
/// ```
///
/// # Solver
///
/// Normal equations `(X^T X) β = X^T y`, solved by Cholesky decomposition
/// when the Gram matrix is positive definite. When it is not (the abalone
/// design matrix is exactly collinear: the three one-hot columns sum to the
/// bias column), the solve falls back to a spectral pseudoinverse, which
/// yields the minimum-norm least-squares solution.
///
/// # Examples
///
/// ```
/// use anillos::prelude::*;
///
/// // Simple linear regression: y = 4x + 1
/// let x = Matrix::from_vec(2, 1, vec![1.0, 2.0]).unwrap();
/// let y = Vector::from_slice(&[5.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// assert!((model.coefficients()[0] - 4.0).abs() < 1e-6);
/// assert!((model.intercept() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Coefficients for features (excluding the bias weight).
    coefficients: Option<Vector<f64>>,
    /// Bias (intercept) weight.
    intercept: f64,
    /// Whether to fit a bias term.
    fit_intercept: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Creates a new `LinearRegression` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: 0.0,
            fit_intercept: true,
        }
    }

    /// Sets whether to fit a bias term.
    #[must_use]
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Returns the coefficients (excluding the bias weight).
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f64> {
        self.coefficients
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the bias (intercept) weight.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Returns the full coefficient vector, bias weight last — one weight
    /// per design-matrix column.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn coefficient_vector(&self) -> Vector<f64> {
        let coefficients = self.coefficients();
        let mut data = coefficients.as_slice().to_vec();
        if self.fit_intercept {
            data.push(self.intercept);
        }
        Vector::from_vec(data)
    }

    /// Predicts the target for a single feature vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the feature vector
    /// length does not match the coefficient count.
    pub fn predict_one(&self, features: &Vector<f64>) -> Result<f64> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or_else(|| AnillosError::from("Model not fitted. Call fit() first."))?;

        if features.len() != coefficients.len() {
            return Err(AnillosError::dimension_mismatch(
                "features",
                coefficients.len(),
                features.len(),
            ));
        }

        Ok(features.dot(coefficients) + self.intercept)
    }

    /// Appends the all-ones bias column to the feature matrix, so the bias
    /// weight lands last in the solved coefficient vector.
    fn add_bias_column(x: &Matrix<f64>) -> Matrix<f64> {
        let (n_rows, n_cols) = x.shape();
        let mut data = Vec::with_capacity(n_rows * (n_cols + 1));

        for i in 0..n_rows {
            for j in 0..n_cols {
                data.push(x.get(i, j));
            }
            data.push(1.0);
        }

        Matrix::from_vec(n_rows, n_cols + 1, data)
            .expect("Internal error: failed to create design matrix")
    }
}

impl Estimator for LinearRegression {
    /// Fits the linear regression model using normal equations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Input dimensions don't match
    /// - The dataset has zero samples
    /// - The Gram matrix has a numerically zero spectrum
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err(AnillosError::dimension_mismatch(
                "samples",
                n_samples,
                y.len(),
            ));
        }

        if n_samples == 0 {
            return Err(AnillosError::EmptyDataset);
        }

        let x_design = if self.fit_intercept {
            Self::add_bias_column(x)
        } else {
            x.clone()
        };

        // Normal equations
        let xt = x_design.transpose();
        let xtx = xt.matmul(&x_design)?;
        let xty = xt.matvec(y)?;

        // Cholesky fast path; pseudoinverse fallback for singular or
        // underdetermined systems (minimum-norm solution).
        let beta = match xtx.cholesky_solve(&xty) {
            Ok(beta) => beta,
            Err(_) => xtx
                .pseudo_solve(&xty)
                .map_err(|_| AnillosError::SingularMatrix)?,
        };

        if self.fit_intercept {
            self.coefficients = Some(beta.slice(0, n_features));
            self.intercept = beta[n_features];
        } else {
            self.coefficients = Some(beta);
            self.intercept = 0.0;
        }

        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the column count
    /// does not match the coefficient count.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or_else(|| AnillosError::from("Model not fitted. Call fit() first."))?;

        if x.n_cols() != coefficients.len() {
            return Err(AnillosError::dimension_mismatch(
                "features",
                coefficients.len(),
                x.n_cols(),
            ));
        }

        let result = x.matvec(coefficients)?;
        Ok(result.add_scalar(self.intercept))
    }

    /// Computes the R² score.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted or dimensions don't match.
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> f64 {
        let y_pred = self
            .predict(x)
            .expect("Model not fitted or dimensions don't match");
        r_squared(&y_pred, y)
    }
}
