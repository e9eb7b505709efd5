//! Model fitting: orchestrates selection, order search and estimation.

use ndarray::{s, Array1, Array2};
use tracing::debug;

use sysid_basis::{build_lagged_matrix, Basis, BasisError, Lag, ModelType, Term};
use sysid_estimate::{unbiased_estimator, Estimator};

use crate::config::OfrConfig;
use crate::criteria::min_info_index;
use crate::error::OfrError;
use crate::order::OrderSearch;
use crate::selection::error_reduction_ratio;

/// An unfitted OFR model: configuration, estimator and basis.
///
/// This is the entry point of the workflow. Create with [`Ofr::new()`]
/// (configuration is validated eagerly), then call [`Ofr::fit()`] to
/// obtain an [`OfrFit`].
#[derive(Debug, Clone)]
pub struct Ofr<E> {
    config: OfrConfig,
    estimator: E,
    basis: Basis,
}

impl<E: Estimator> Ofr<E> {
    /// Creates a model from a configuration, estimator and basis.
    ///
    /// # Errors
    ///
    /// Propagates [`OfrConfig::validate()`] failures; the model is
    /// never constructed from an invalid configuration.
    pub fn new(config: OfrConfig, estimator: E, basis: Basis) -> Result<Self, OfrError> {
        config.validate()?;
        Ok(Self {
            config,
            estimator,
            basis,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OfrConfig {
        &self.config
    }

    /// Selects the model structure and estimates its coefficients.
    ///
    /// Builds the candidate regressor library from `x` and `y`, runs
    /// the information-criterion order search when enabled, selects the
    /// final terms by error reduction ratio, and fits coefficients via
    /// the estimator (with the unbiased correction pass for estimators
    /// that request it).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`OfrError::EmptyTarget`] | `y` is empty |
    /// | [`OfrError::NTermsRequired`] | order selection disabled and no `n_terms` |
    /// | [`OfrError::Basis`] | lagged-matrix or basis-expansion failure |
    /// | [`OfrError::Estimate`] | coefficient estimation failure |
    #[tracing::instrument(skip_all, fields(n_samples = y.len(), model_type = %self.config.model_type()))]
    pub fn fit(&self, x: Option<&Array2<f64>>, y: &Array1<f64>) -> Result<OfrFit, OfrError> {
        if y.is_empty() {
            return Err(OfrError::EmptyTarget);
        }

        let cfg = &self.config;
        let max_lag = cfg.max_lag();
        if y.len() < max_lag + 1 {
            return Err(OfrError::Basis(BasisError::InsufficientSamples {
                n: y.len(),
                min: max_lag + 1,
                max_lag,
            }));
        }
        let lagged = build_lagged_matrix(x, y, cfg.xlag(), cfg.ylag(), cfg.model_type())?;
        let psi = self.basis.fit(&lagged, max_lag, None)?;

        // A placeholder input keeps the code table well-formed for
        // input-free model classes.
        let n_inputs = x.map_or(1, |m| m.ncols());
        let codes = self
            .basis
            .codes(cfg.xlag(), cfg.ylag(), n_inputs, cfg.model_type());

        let y_offset = y.slice(s![max_lag..]).to_owned();
        let alpha = self.estimator.ridge_alpha();

        let info_values = if cfg.order_selection() {
            let search = OrderSearch {
                criterion: cfg.info_criteria(),
                n_info_values: cfg.n_info_values(),
                alpha,
                eps: cfg.eps(),
                err_tol: cfg.err_tol(),
                estimator: &self.estimator,
            };
            Some(search.information_criterion(&psi, y_offset.view())?)
        } else {
            None
        };

        let model_length = match (cfg.n_terms(), &info_values) {
            (Some(n), _) => n,
            (None, Some(curve)) => {
                let n = min_info_index(curve.as_slice().expect("standard layout"));
                debug!(n_terms = n, criterion = %cfg.info_criteria(), "order selected");
                n
            }
            (None, None) => return Err(OfrError::NTermsRequired),
        };

        let selection = error_reduction_ratio(
            &psi,
            y_offset.view(),
            model_length,
            alpha,
            cfg.eps(),
            cfg.err_tol(),
        );

        let final_model: Vec<Term> = selection
            .pivot()
            .iter()
            .map(|&p| codes[p].clone())
            .collect();

        let mut theta = self
            .estimator
            .optimize(selection.psi_orthogonal(), &y_offset)?;
        if self.estimator.unbiased() {
            theta = unbiased_estimator(
                selection.psi_orthogonal(),
                &y_offset,
                &theta,
                cfg.elag(),
                &self.estimator,
                self.estimator.uiter(),
            )?;
        }

        Ok(OfrFit {
            final_model,
            pivot: selection.pivot().to_vec(),
            err: selection.err().to_vec(),
            theta,
            max_lag,
            info_values,
            model_type: cfg.model_type(),
            xlag: cfg.xlag().clone(),
            ylag: cfg.ylag().clone(),
            basis: self.basis.clone(),
        })
    }
}

/// A fitted OFR model.
///
/// Read-only after construction: safe to share across threads and
/// reuse across any number of [`OfrFit::predict()`] calls. The
/// invariant `theta.len() == final_model.len() == pivot.len()` holds by
/// construction.
#[derive(Debug, Clone)]
pub struct OfrFit {
    pub(crate) final_model: Vec<Term>,
    pub(crate) pivot: Vec<usize>,
    pub(crate) err: Vec<f64>,
    pub(crate) theta: Array1<f64>,
    pub(crate) max_lag: usize,
    pub(crate) info_values: Option<Array1<f64>>,
    pub(crate) model_type: ModelType,
    pub(crate) xlag: Lag,
    pub(crate) ylag: Lag,
    pub(crate) basis: Basis,
}

impl OfrFit {
    /// The selected terms, in selection order.
    pub fn final_model(&self) -> &[Term] {
        &self.final_model
    }

    /// Indices of the selected terms into the candidate library, in
    /// selection order.
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// ERR contribution of each selected term.
    pub fn err(&self) -> &[f64] {
        &self.err
    }

    /// Estimated coefficients, one per selected term.
    pub fn theta(&self) -> &Array1<f64> {
        &self.theta
    }

    /// The largest lag of the model; prediction needs this many seed
    /// samples.
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    /// The information-criterion curve, when order selection ran.
    pub fn info_values(&self) -> Option<&Array1<f64>> {
        self.info_values.as_ref()
    }

    /// Number of selected terms.
    pub fn n_terms(&self) -> usize {
        self.final_model.len()
    }

    /// The model class this fit was produced under.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }
}
