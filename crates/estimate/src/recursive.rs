//! Recursive least squares.

use ndarray::{Array1, Array2};

use crate::error::EstimateError;
use crate::estimator::Estimator;

/// Recursive least squares with exponential forgetting.
///
/// Processes samples sequentially, updating the coefficient vector and
/// inverse-covariance matrix per row. As an adaptive filter its
/// estimates are biased in the presence of colored noise; construct it
/// with [`RecursiveLeastSquares::with_unbiased()`] to request the
/// extended-least-squares correction pass after fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecursiveLeastSquares {
    forgetting_factor: f64,
    delta: f64,
    unbiased: bool,
    uiter: usize,
}

impl RecursiveLeastSquares {
    /// Creates an RLS estimator.
    ///
    /// `forgetting_factor` weights past samples (1.0 = no forgetting);
    /// the inverse covariance is initialized to `I / delta`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidForgettingFactor`] if the
    /// factor lies outside `(0, 1]`.
    pub fn new(forgetting_factor: f64) -> Result<Self, EstimateError> {
        if !forgetting_factor.is_finite()
            || forgetting_factor <= 0.0
            || forgetting_factor > 1.0
        {
            return Err(EstimateError::InvalidForgettingFactor {
                got: forgetting_factor,
            });
        }
        Ok(Self {
            forgetting_factor,
            delta: 0.01,
            unbiased: false,
            uiter: 30,
        })
    }

    /// Requests the unbiased correction pass with `uiter` iterations.
    pub fn with_unbiased(mut self, uiter: usize) -> Self {
        self.unbiased = true;
        self.uiter = uiter;
        self
    }

    /// Returns the forgetting factor.
    pub fn forgetting_factor(&self) -> f64 {
        self.forgetting_factor
    }
}

impl Default for RecursiveLeastSquares {
    fn default() -> Self {
        Self {
            forgetting_factor: 0.98,
            delta: 0.01,
            unbiased: false,
            uiter: 30,
        }
    }
}

impl Estimator for RecursiveLeastSquares {
    fn optimize(&self, psi: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>, EstimateError> {
        let (m, n) = psi.dim();
        if y.len() != m {
            return Err(EstimateError::DimensionMismatch {
                rows: m,
                targets: y.len(),
            });
        }
        if m < n {
            return Err(EstimateError::Underdetermined { rows: m, cols: n });
        }

        let lambda = self.forgetting_factor;
        let mut theta = Array1::zeros(n);
        let mut p = Array2::eye(n) / self.delta;

        for k in 0..m {
            let phi = psi.row(k);
            let p_phi = p.dot(&phi);
            let denom = lambda + phi.dot(&p_phi);
            let gain = &p_phi / denom;
            let innovation = y[k] - phi.dot(&theta);
            theta = &theta + &(&gain * innovation);
            // P <- (P - gain phiᵀ P) / lambda
            let phi_p = phi.dot(&p);
            for i in 0..n {
                for j in 0..n {
                    p[[i, j]] = (p[[i, j]] - gain[i] * phi_p[j]) / lambda;
                }
            }
        }
        Ok(theta)
    }

    fn unbiased(&self) -> bool {
        self.unbiased
    }

    fn uiter(&self) -> usize {
        self.uiter
    }
}
