//! Dense least-squares solving via Householder QR.
//!
//! Hand-rolled to keep the workspace free of BLAS bindings; the matrix
//! widths here are model term counts, which stay small.

use ndarray::{Array1, Array2};

use crate::error::EstimateError;

/// Solves `min ||a x - b||` for an `m x n` matrix with `m >= n`.
///
/// Factorizes a working copy of `a` by Householder reflections,
/// accumulates `Qᵀb`, and back-substitutes against the triangular
/// factor.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EstimateError::DimensionMismatch`] | `b.len() != m` |
/// | [`EstimateError::Underdetermined`] | `m < n` |
/// | [`EstimateError::SingularSystem`] | rank-deficient `a` |
pub fn solve_least_squares(
    a: &Array2<f64>,
    b: &Array1<f64>,
) -> Result<Array1<f64>, EstimateError> {
    let (m, n) = a.dim();
    if b.len() != m {
        return Err(EstimateError::DimensionMismatch {
            rows: m,
            targets: b.len(),
        });
    }
    if m < n {
        return Err(EstimateError::Underdetermined { rows: m, cols: n });
    }

    let mut r = a.clone();
    let mut qtb = b.clone();
    let mut v = vec![0.0; m];

    for k in 0..n {
        let norm: f64 = (k..m).map(|i| r[[i, k]] * r[[i, k]]).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(EstimateError::SingularSystem);
        }
        // Reflect onto -sign(r_kk) * norm * e_k for numerical stability.
        let alpha = if r[[k, k]] > 0.0 { -norm } else { norm };
        v[k] = r[[k, k]] - alpha;
        for i in k + 1..m {
            v[i] = r[[i, k]];
        }
        let vtv: f64 = (k..m).map(|i| v[i] * v[i]).sum();

        r[[k, k]] = alpha;
        for i in k + 1..m {
            r[[i, k]] = 0.0;
        }

        for j in k + 1..n {
            let dot: f64 = (k..m).map(|i| v[i] * r[[i, j]]).sum();
            let scale = 2.0 * dot / vtv;
            for i in k..m {
                r[[i, j]] -= scale * v[i];
            }
        }
        let dot: f64 = (k..m).map(|i| v[i] * qtb[i]).sum();
        let scale = 2.0 * dot / vtv;
        for i in k..m {
            qtb[i] -= scale * v[i];
        }
    }

    let diag_max = (0..n).map(|k| r[[k, k]].abs()).fold(0.0_f64, f64::max);
    let threshold = diag_max * (m as f64) * f64::EPSILON;

    let mut x = Array1::zeros(n);
    for k in (0..n).rev() {
        if r[[k, k]].abs() <= threshold {
            return Err(EstimateError::SingularSystem);
        }
        let mut sum = qtb[k];
        for j in k + 1..n {
            sum -= r[[k, j]] * x[j];
        }
        x[k] = sum / r[[k, k]];
    }
    Ok(x)
}
