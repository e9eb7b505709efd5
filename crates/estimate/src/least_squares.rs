//! Ordinary least squares.

use ndarray::{Array1, Array2};

use crate::error::EstimateError;
use crate::estimator::Estimator;
use crate::solve::solve_least_squares;

/// Ordinary least squares via Householder QR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeastSquares;

impl Estimator for LeastSquares {
    fn optimize(&self, psi: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>, EstimateError> {
        solve_least_squares(psi, y)
    }
}
