//! Configuration for orthogonal forward regression.

use sysid_basis::{Lag, ModelType};

use crate::criteria::InfoCriterion;
use crate::error::OfrError;

/// Configuration for an OFR model structure selection run.
///
/// Use the builder methods to customise parameters; validation runs
/// eagerly when the model is constructed.
///
/// # Example
///
/// ```
/// use sysid_ofr::{InfoCriterion, OfrConfig};
///
/// let config = OfrConfig::new()
///     .with_ylag(vec![1, 2])
///     .with_xlag(2)
///     .with_info_criteria(InfoCriterion::Bic)
///     .with_n_info_values(10);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OfrConfig {
    ylag: Lag,
    xlag: Lag,
    elag: Lag,
    order_selection: bool,
    info_criteria: InfoCriterion,
    n_terms: Option<usize>,
    n_info_values: usize,
    model_type: ModelType,
    eps: f64,
    err_tol: Option<f64>,
}

impl OfrConfig {
    /// Creates a configuration with the conventional defaults:
    /// lags of 2 everywhere, order selection by AIC over 15 sizes,
    /// NARMAX model class, machine-epsilon score floor, no ERR
    /// tolerance.
    pub fn new() -> Self {
        Self {
            ylag: Lag::default(),
            xlag: Lag::default(),
            elag: Lag::default(),
            order_selection: true,
            info_criteria: InfoCriterion::default(),
            n_terms: None,
            n_info_values: 15,
            model_type: ModelType::default(),
            eps: f64::EPSILON,
            err_tol: None,
        }
    }

    /// Sets the output lag specification.
    pub fn with_ylag(mut self, ylag: impl Into<Lag>) -> Self {
        self.ylag = ylag.into();
        self
    }

    /// Sets the input lag specification.
    pub fn with_xlag(mut self, xlag: impl Into<Lag>) -> Self {
        self.xlag = xlag.into();
        self
    }

    /// Sets the noise lag specification used by the unbiased
    /// correction pass.
    pub fn with_elag(mut self, elag: impl Into<Lag>) -> Self {
        self.elag = elag.into();
        self
    }

    /// Enables or disables information-criterion order selection.
    pub fn with_order_selection(mut self, enabled: bool) -> Self {
        self.order_selection = enabled;
        self
    }

    /// Sets the information criterion.
    pub fn with_info_criteria(mut self, criterion: InfoCriterion) -> Self {
        self.info_criteria = criterion;
        self
    }

    /// Fixes the number of model terms, overriding the elbow rule.
    pub fn with_n_terms(mut self, n_terms: usize) -> Self {
        self.n_terms = Some(n_terms);
        self
    }

    /// Sets how many model sizes the order search scores.
    pub fn with_n_info_values(mut self, n_info_values: usize) -> Self {
        self.n_info_values = n_info_values;
        self
    }

    /// Sets the model class.
    pub fn with_model_type(mut self, model_type: ModelType) -> Self {
        self.model_type = model_type;
        self
    }

    /// Sets the ERR score floor.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Sets the cumulative-ERR early-stop tolerance.
    pub fn with_err_tol(mut self, err_tol: f64) -> Self {
        self.err_tol = Some(err_tol);
        self
    }

    /// Returns the output lag specification.
    pub fn ylag(&self) -> &Lag {
        &self.ylag
    }

    /// Returns the input lag specification.
    pub fn xlag(&self) -> &Lag {
        &self.xlag
    }

    /// Returns the noise lag specification.
    pub fn elag(&self) -> &Lag {
        &self.elag
    }

    /// Returns whether order selection is enabled.
    pub fn order_selection(&self) -> bool {
        self.order_selection
    }

    /// Returns the information criterion.
    pub fn info_criteria(&self) -> InfoCriterion {
        self.info_criteria
    }

    /// Returns the fixed term count, if any.
    pub fn n_terms(&self) -> Option<usize> {
        self.n_terms
    }

    /// Returns the number of model sizes the order search scores.
    pub fn n_info_values(&self) -> usize {
        self.n_info_values
    }

    /// Returns the model class.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Returns the ERR score floor.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the cumulative-ERR tolerance, if any.
    pub fn err_tol(&self) -> Option<f64> {
        self.err_tol
    }

    /// Returns the largest lag across the output and input
    /// specifications, which fixes how many seed samples prediction
    /// needs.
    pub fn max_lag(&self) -> usize {
        self.ylag.max().max(self.xlag.max())
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`OfrError::Basis`] | a zero or empty lag specification |
    /// | [`OfrError::InvalidNTerms`] | `n_terms == Some(0)` |
    /// | [`OfrError::InvalidNInfoValues`] | `n_info_values == 0` |
    /// | [`OfrError::InvalidEps`] | negative or non-finite `eps` |
    pub fn validate(&self) -> Result<(), OfrError> {
        self.ylag.validate()?;
        self.xlag.validate()?;
        self.elag.validate()?;
        if self.n_terms == Some(0) {
            return Err(OfrError::InvalidNTerms);
        }
        if self.n_info_values == 0 {
            return Err(OfrError::InvalidNInfoValues);
        }
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(OfrError::InvalidEps { got: self.eps });
        }
        Ok(())
    }
}

impl Default for OfrConfig {
    fn default() -> Self {
        Self::new()
    }
}
