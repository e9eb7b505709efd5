//! Error types for the sysid-ofr crate.

use sysid_basis::BasisError;
use sysid_estimate::EstimateError;

/// Error type for all fallible operations in the sysid-ofr crate.
///
/// Configuration variants are raised eagerly at construction or fit
/// entry; data variants before any computation proceeds. Numeric
/// degeneracy inside the selection loop is floored by `eps` and never
/// surfaces as an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OfrError {
    /// Returned when `n_terms` is set to zero.
    #[error("n_terms must be >= 1, got 0")]
    InvalidNTerms,

    /// Returned when `n_info_values` is zero.
    #[error("n_info_values must be >= 1, got 0")]
    InvalidNInfoValues,

    /// Returned when `eps` is negative or non-finite.
    #[error("eps must be finite and non-negative, got {got}")]
    InvalidEps {
        /// The invalid eps value.
        got: f64,
    },

    /// Returned when order selection is disabled and no term count was
    /// supplied.
    #[error("n_terms must be set when order_selection is disabled")]
    NTermsRequired,

    /// Returned when an information criterion name is not recognised.
    #[error("info_criteria must be aic, aicc, bic, fpe or lilc, got {got}")]
    UnknownCriterion {
        /// The unrecognised criterion name.
        got: String,
    },

    /// Returned when `steps_ahead` is zero.
    #[error("steps_ahead must be >= 1")]
    InvalidStepsAhead,

    /// Returned when a free-run simulation has no inputs and no
    /// explicit horizon.
    #[error("forecast_horizon is required for free-run simulation without exogenous inputs")]
    HorizonRequired,

    /// Returned when the training target is empty.
    #[error("target series y is empty")]
    EmptyTarget,

    /// Returned when prediction is seeded with fewer than `max_lag`
    /// initial values.
    #[error("insufficient initial conditions: got {got} samples, need at least {min}")]
    InsufficientInitialConditions {
        /// Number of seed samples provided.
        got: usize,
        /// Minimum seed samples required (the model's max lag).
        min: usize,
    },

    /// A lagged-matrix or basis-expansion failure.
    #[error(transparent)]
    Basis(#[from] BasisError),

    /// A parameter-estimation failure.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
