//! Model class dispatch for NARMAX identification.

use std::fmt;
use std::str::FromStr;

use crate::error::BasisError;

/// The class of model being identified.
///
/// Determines which signals enter the candidate regressor library and
/// whether prediction feeds back on past outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelType {
    /// Feedback on lagged outputs plus exogenous inputs.
    #[default]
    Narmax,
    /// Feedback on lagged outputs only; inputs are ignored.
    Nar,
    /// Exogenous inputs only, no output feedback.
    Nfir,
}

impl ModelType {
    /// Returns `true` if lagged outputs enter the regressor library.
    pub fn uses_output(&self) -> bool {
        matches!(self, ModelType::Narmax | ModelType::Nar)
    }

    /// Returns `true` if exogenous inputs enter the regressor library.
    pub fn uses_input(&self) -> bool {
        matches!(self, ModelType::Narmax | ModelType::Nfir)
    }

    /// Returns the conventional upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::Narmax => "NARMAX",
            ModelType::Nar => "NAR",
            ModelType::Nfir => "NFIR",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelType {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NARMAX" => Ok(ModelType::Narmax),
            "NAR" => Ok(ModelType::Nar),
            "NFIR" => Ok(ModelType::Nfir),
            other => Err(BasisError::UnknownModelType { got: other.into() }),
        }
    }
}
