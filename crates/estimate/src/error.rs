//! Error types for the sysid-estimate crate.

use sysid_basis::BasisError;

/// Error type for all fallible operations in the sysid-estimate crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimateError {
    /// Returned when the information matrix and target lengths differ.
    #[error("information matrix has {rows} rows but target has {targets} samples")]
    DimensionMismatch {
        /// Number of matrix rows.
        rows: usize,
        /// Number of target samples.
        targets: usize,
    },

    /// Returned when there are fewer samples than coefficients.
    #[error("underdetermined system: {rows} samples for {cols} coefficients")]
    Underdetermined {
        /// Number of samples.
        rows: usize,
        /// Number of coefficients.
        cols: usize,
    },

    /// Returned when the system is numerically rank-deficient.
    #[error("singular system: information matrix is rank-deficient")]
    SingularSystem,

    /// Returned when a ridge coefficient is negative or non-finite.
    #[error("ridge alpha must be finite and non-negative, got {got}")]
    InvalidAlpha {
        /// The invalid alpha value.
        got: f64,
    },

    /// Returned when a forgetting factor lies outside (0, 1].
    #[error("forgetting factor must lie in (0, 1], got {got}")]
    InvalidForgettingFactor {
        /// The invalid forgetting factor.
        got: f64,
    },

    /// Returned when a coefficient vector does not match the matrix width.
    #[error("coefficient count {got} does not match {expected} matrix columns")]
    CoefficientMismatch {
        /// Expected number of coefficients.
        expected: usize,
        /// Number of coefficients provided.
        got: usize,
    },

    /// A lagged-matrix construction failure during the unbiased
    /// correction pass.
    #[error(transparent)]
    Basis(#[from] BasisError),
}
