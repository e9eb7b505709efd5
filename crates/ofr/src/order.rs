//! Information-criterion search over candidate model sizes.

use ndarray::{Array1, Array2, ArrayView1};
use tracing::warn;

use sysid_estimate::Estimator;

use crate::criteria::InfoCriterion;
use crate::error::OfrError;
use crate::selection::error_reduction_ratio;

/// Parameters threaded from the model configuration into the search.
pub(crate) struct OrderSearch<'a> {
    pub criterion: InfoCriterion,
    pub n_info_values: usize,
    pub alpha: f64,
    pub eps: f64,
    pub err_tol: Option<f64>,
    pub estimator: &'a dyn Estimator,
}

impl OrderSearch<'_> {
    /// Scores candidate model sizes `1..=n_info_values`.
    ///
    /// For each size the selector picks that many terms, the estimator
    /// fits coefficients on the re-selected columns, and the criterion
    /// scores the residual variance (n-1 denominator). A request
    /// exceeding the number of candidate columns is clamped with a
    /// warning rather than failing.
    pub fn information_criterion(
        &self,
        psi: &Array2<f64>,
        y: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, OfrError> {
        let mut n_values = self.n_info_values;
        if n_values > psi.ncols() {
            warn!(
                requested = n_values,
                available = psi.ncols(),
                "n_info_values exceeds the candidate regressor space; clamping"
            );
            n_values = psi.ncols();
        }

        let n_samples = y.len();
        let y_owned = y.to_owned();
        let mut curve = Array1::from_elem(n_values, f64::NAN);

        for i in 0..n_values {
            let n_theta = i + 1;
            let selection =
                error_reduction_ratio(psi, y, n_theta, self.alpha, self.eps, self.err_tol);
            let theta = self.estimator.optimize(selection.psi_orthogonal(), &y_owned)?;
            let residual = &y_owned - &selection.psi_orthogonal().dot(&theta);
            let e_var = sample_variance(residual.view());
            curve[i] = self.criterion.score(n_theta, n_samples, e_var);
        }
        Ok(curve)
    }
}

/// Sample variance with n-1 denominator.
fn sample_variance(data: ArrayView1<'_, f64>) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = data.sum() / n as f64;
    data.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / (n as f64 - 1.0)
}
