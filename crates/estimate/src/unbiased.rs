//! Extended-least-squares correction for biased estimators.

use ndarray::{Array1, Array2};

use sysid_basis::{build_lagged_matrix, Lag, ModelType};

use crate::error::EstimateError;
use crate::estimator::Estimator;

/// Removes the noise-induced bias from adaptive-filter coefficients.
///
/// Iteratively extends the information matrix with lagged residual
/// columns (the moving-average part of the noise model, lags from
/// `elag`), refits the joint system, and keeps the process
/// coefficients. `psi` and `y` are the offset training data the model
/// coefficients were estimated on.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EstimateError::CoefficientMismatch`] | `theta.len() != psi.ncols()` |
/// | [`EstimateError::DimensionMismatch`] | `y.len() != psi.nrows()` |
///
/// Errors from the underlying `optimize()` calls and from residual
/// lagging propagate unchanged.
pub fn unbiased_estimator(
    psi: &Array2<f64>,
    y: &Array1<f64>,
    theta: &Array1<f64>,
    elag: &Lag,
    estimator: &dyn Estimator,
    iterations: usize,
) -> Result<Array1<f64>, EstimateError> {
    let (m, n) = psi.dim();
    if theta.len() != n {
        return Err(EstimateError::CoefficientMismatch {
            expected: n,
            got: theta.len(),
        });
    }
    if y.len() != m {
        return Err(EstimateError::DimensionMismatch {
            rows: m,
            targets: y.len(),
        });
    }

    let mut corrected = theta.clone();
    for _ in 0..iterations {
        let residual = y - &psi.dot(&corrected);
        if residual.dot(&residual) <= f64::EPSILON * m as f64 {
            // Already an exact fit; lagged residual columns would be zero.
            break;
        }
        // Lagged residuals, zero-padded head: the noise regressors.
        let noise = build_lagged_matrix(None, &residual, &Lag::Max(1), elag, ModelType::Nar)?;

        let mut extended = Array2::zeros((m, n + noise.ncols()));
        extended.slice_mut(ndarray::s![.., ..n]).assign(psi);
        extended.slice_mut(ndarray::s![.., n..]).assign(&noise);

        let joint = estimator.optimize(&extended, y)?;
        corrected = joint.slice(ndarray::s![..n]).to_owned();
    }
    Ok(corrected)
}
