//! Error types for the sysid-basis crate.

/// Error type for all fallible operations in the sysid-basis crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BasisError {
    /// Returned when a lag specification contains a zero lag.
    #[error("lags must be >= 1, got {lag}")]
    InvalidLag {
        /// The offending lag value.
        lag: usize,
    },

    /// Returned when a lag list is empty.
    #[error("lag list must not be empty")]
    EmptyLagList,

    /// Returned when a model type string is not recognised.
    #[error("model_type must be NARMAX, NAR or NFIR, got {got}")]
    UnknownModelType {
        /// The unrecognised model type string.
        got: String,
    },

    /// Returned when the target series is empty.
    #[error("target series is empty")]
    EmptySeries,

    /// Returned when a model type requiring exogenous inputs is built without them.
    #[error("model type {model_type} requires exogenous input data")]
    MissingInput {
        /// The model type that needs inputs.
        model_type: &'static str,
    },

    /// Returned when input and output series lengths differ.
    #[error("input length {x_len} does not match output length {y_len}")]
    LengthMismatch {
        /// Number of input samples.
        x_len: usize,
        /// Number of output samples.
        y_len: usize,
    },

    /// Returned when the series is too short for the requested lags.
    #[error("insufficient samples: got {n}, need at least {min} for max lag {max_lag}")]
    InsufficientSamples {
        /// Number of samples provided.
        n: usize,
        /// Minimum number of samples required.
        min: usize,
        /// The largest lag in the specification.
        max_lag: usize,
    },

    /// Returned when a basis function is built with a zero degree or harmonic count.
    #[error("{parameter} must be >= 1, got 0")]
    InvalidBasisParameter {
        /// Name of the offending constructor parameter.
        parameter: &'static str,
    },

    /// Returned when a predefined regressor index is out of range.
    #[error("regressor index {index} out of range for {n_columns} candidate columns")]
    RegressorOutOfRange {
        /// The offending column index.
        index: usize,
        /// Number of candidate columns available.
        n_columns: usize,
    },
}
