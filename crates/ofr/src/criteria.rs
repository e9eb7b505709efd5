//! Information criteria for model order selection.

use std::fmt;
use std::str::FromStr;

use crate::error::OfrError;

/// Scalar criteria trading off residual variance against term count.
/// Lower is better for all variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InfoCriterion {
    /// Akaike information criterion.
    #[default]
    Aic,
    /// Small-sample corrected AIC.
    Aicc,
    /// Bayesian information criterion.
    Bic,
    /// Final prediction error.
    Fpe,
    /// Khundrin's law-of-iterated-logarithm criterion.
    Lilc,
}

impl InfoCriterion {
    /// Scores a model of `n_terms` terms fitted on `n_samples`
    /// effective samples with residual variance `e_var`.
    pub fn score(&self, n_terms: usize, n_samples: usize, e_var: f64) -> f64 {
        let k = n_terms as f64;
        let n = n_samples as f64;
        let e_factor = n * e_var.ln();
        match self {
            InfoCriterion::Aic => e_factor + 2.0 * k,
            InfoCriterion::Aicc => {
                let aic = e_factor + 2.0 * k;
                aic + 2.0 * k * (k + 1.0) / (n - k - 1.0)
            }
            InfoCriterion::Bic => e_factor + k * n.ln(),
            InfoCriterion::Fpe => e_factor + n * ((n + k) / (n - k)).ln(),
            InfoCriterion::Lilc => e_factor + 2.0 * k * n.ln().ln(),
        }
    }

    /// Returns the lowercase criterion name.
    pub fn name(&self) -> &'static str {
        match self {
            InfoCriterion::Aic => "aic",
            InfoCriterion::Aicc => "aicc",
            InfoCriterion::Bic => "bic",
            InfoCriterion::Fpe => "fpe",
            InfoCriterion::Lilc => "lilc",
        }
    }
}

impl fmt::Display for InfoCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InfoCriterion {
    type Err = OfrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aic" => Ok(InfoCriterion::Aic),
            "aicc" => Ok(InfoCriterion::Aicc),
            "bic" => Ok(InfoCriterion::Bic),
            "fpe" => Ok(InfoCriterion::Fpe),
            "lilc" => Ok(InfoCriterion::Lilc),
            other => Err(OfrError::UnknownCriterion { got: other.into() }),
        }
    }
}

/// Returns the term count at the elbow of an information-criterion
/// curve: the first index whose first-difference is positive, plus one,
/// or the curve length if the curve never increases.
///
/// NaN padding never compares as increasing, matching the behavior of
/// scoring only the available model sizes.
pub fn min_info_index(curve: &[f64]) -> usize {
    for i in 0..curve.len().saturating_sub(1) {
        if curve[i + 1] - curve[i] > 0.0 {
            return i + 1;
        }
    }
    curve.len()
}
