//! The parameter-estimator capability trait.

use ndarray::{Array1, Array2};

use crate::error::EstimateError;

/// Capability interface shared by all parameter estimators.
///
/// The selection engine consumes estimators only through this trait:
/// it calls [`Estimator::optimize()`] to fit coefficients on selected
/// regressors, folds [`Estimator::ridge_alpha()`] into its ERR scores,
/// and runs the extended-least-squares correction pass for estimators
/// reporting [`Estimator::unbiased()`].
///
/// Implementations must be stateless at call time: `optimize()` takes
/// `&self` and a fitted model may be shared across threads.
pub trait Estimator: Send + Sync {
    /// Estimates coefficients for `psi * theta ≈ y`.
    fn optimize(&self, psi: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>, EstimateError>;

    /// Returns `true` if coefficients need the unbiased correction pass.
    fn unbiased(&self) -> bool {
        false
    }

    /// Returns the ridge regularization coefficient, 0 for
    /// non-ridge estimators.
    fn ridge_alpha(&self) -> f64 {
        0.0
    }

    /// Number of iterations for the unbiased correction pass.
    fn uiter(&self) -> usize {
        30
    }
}
