//! Ridge (Tikhonov-regularized) least squares.

use ndarray::{Array1, Array2};

use crate::error::EstimateError;
use crate::estimator::Estimator;
use crate::solve::solve_least_squares;

/// Ridge regression: solves `(ΨᵀΨ + αI) θ = Ψᵀy`.
///
/// The ridge coefficient also feeds the selection engine, which adds it
/// to each candidate's self-energy when scoring error reduction ratios
/// (uniform regularized orthogonal least squares).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeRegression {
    alpha: f64,
}

impl RidgeRegression {
    /// Creates a ridge estimator with regularization coefficient `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidAlpha`] if `alpha` is negative
    /// or non-finite.
    pub fn new(alpha: f64) -> Result<Self, EstimateError> {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(EstimateError::InvalidAlpha { got: alpha });
        }
        Ok(Self { alpha })
    }

    /// Returns the regularization coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Estimator for RidgeRegression {
    fn optimize(&self, psi: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>, EstimateError> {
        let (m, n) = psi.dim();
        if y.len() != m {
            return Err(EstimateError::DimensionMismatch {
                rows: m,
                targets: y.len(),
            });
        }
        let mut gram = psi.t().dot(psi);
        for k in 0..n {
            gram[[k, k]] += self.alpha;
        }
        let rhs = psi.t().dot(y);
        solve_least_squares(&gram, &rhs)
    }

    fn ridge_alpha(&self) -> f64 {
        self.alpha
    }
}
