//! Prediction modes for a fitted model.

use ndarray::{s, Array1, Array2};

use sysid_basis::{build_lagged_matrix, decode, BasisError, Signal};

use crate::error::OfrError;
use crate::fit::OfrFit;

impl OfrFit {
    /// Simulates the model over new data.
    ///
    /// The first `max_lag` values of `y` seed the recursion and are
    /// copied verbatim into the front of the returned series, so the
    /// output aligns sample-for-sample with the measured record.
    ///
    /// `steps_ahead` selects the mode:
    ///
    /// * `None` runs a free simulation: every lagged output the model
    ///   references comes from its own previous predictions. Without
    ///   inputs the horizon must be given via `forecast_horizon`
    ///   (predicted samples beyond the seed); with inputs the horizon
    ///   is `x.nrows()`.
    /// * `Some(1)` is one-step-ahead: every lagged regressor is taken
    ///   from the measured data in `y` (and `x`).
    /// * `Some(n)` runs free simulations of length `n`, reseeding from
    ///   the measured values after each window.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`OfrError::EmptyTarget`] | `y` is empty |
    /// | [`OfrError::InsufficientInitialConditions`] | `y` shorter than `max_lag` |
    /// | [`OfrError::InvalidStepsAhead`] | `steps_ahead == Some(0)` |
    /// | [`OfrError::HorizonRequired`] | free run with no inputs and no horizon |
    /// | [`OfrError::Basis`] | missing inputs, `x`/`y` length mismatch in a measured-record mode, or window expansion failure |
    pub fn predict(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
        steps_ahead: Option<usize>,
        forecast_horizon: Option<usize>,
    ) -> Result<Array1<f64>, OfrError> {
        if y.is_empty() {
            return Err(OfrError::EmptyTarget);
        }
        if y.len() < self.max_lag {
            return Err(OfrError::InsufficientInitialConditions {
                got: y.len(),
                min: self.max_lag,
            });
        }
        if self.model_type.uses_input() && x.is_none() {
            return Err(OfrError::Basis(BasisError::MissingInput {
                model_type: self.model_type.name(),
            }));
        }
        // Measured-record modes walk x alongside y sample for sample;
        // in a free run y only seeds the recursion, so no check there.
        if let (Some(inputs), Some(steps)) = (x, steps_ahead) {
            if steps > 0 && inputs.nrows() != y.len() {
                return Err(OfrError::Basis(BasisError::LengthMismatch {
                    x_len: inputs.nrows(),
                    y_len: y.len(),
                }));
            }
        }

        let tail = match steps_ahead {
            None => self.free_run(x, y, forecast_horizon)?,
            Some(0) => return Err(OfrError::InvalidStepsAhead),
            Some(1) => self.one_step_ahead(x, y)?,
            Some(steps) => self.n_step_ahead(x, y, steps)?,
        };

        let mut yhat = Array1::zeros(self.max_lag + tail.len());
        yhat.slice_mut(s![..self.max_lag])
            .assign(&y.slice(s![..self.max_lag]));
        yhat.slice_mut(s![self.max_lag..]).assign(&tail);
        Ok(yhat)
    }

    /// One-step-ahead prediction: Ψ over the measured record, restricted
    /// to the selected terms, times θ.
    fn one_step_ahead(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
    ) -> Result<Array1<f64>, OfrError> {
        let lagged = build_lagged_matrix(x, y, &self.xlag, &self.ylag, self.model_type)?;
        let psi = self
            .basis
            .transform(&lagged, self.max_lag, Some(&self.pivot))?;
        Ok(psi.dot(&self.theta))
    }

    /// Free-run simulation over the resolved horizon. Returns only the
    /// predicted tail (samples `max_lag..horizon`).
    fn free_run(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
        forecast_horizon: Option<usize>,
    ) -> Result<Array1<f64>, OfrError> {
        let horizon = match (x, forecast_horizon) {
            (Some(inputs), _) => inputs.nrows(),
            (None, Some(h)) => h + self.max_lag,
            (None, None) => return Err(OfrError::HorizonRequired),
        };
        if horizon <= self.max_lag {
            return Ok(Array1::zeros(0));
        }

        if self.basis.is_polynomial() {
            self.free_run_polynomial(x, y, horizon)
        } else {
            self.free_run_transform(x, y, horizon)
        }
    }

    /// Fast path for the polynomial basis: each selected term is a
    /// product of lagged signals named by its codes, so the recursion
    /// evaluates directly from the code table without rebuilding the
    /// candidate library at every step.
    fn free_run_polynomial(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
        horizon: usize,
    ) -> Result<Array1<f64>, OfrError> {
        let mut y_out = Array1::zeros(horizon);
        y_out
            .slice_mut(s![..self.max_lag])
            .assign(&y.slice(s![..self.max_lag]));

        for i in self.max_lag..horizon {
            let mut acc = 0.0;
            for (term, &coefficient) in self.final_model.iter().zip(self.theta.iter()) {
                let mut value = coefficient;
                for &code in term.codes() {
                    match decode(code) {
                        Signal::Constant => {}
                        Signal::Output { lag } => value *= y_out[i - lag],
                        Signal::Input { index, lag } => match x {
                            Some(inputs) => value *= inputs[[i - lag, index]],
                            None => {
                                return Err(OfrError::Basis(BasisError::MissingInput {
                                    model_type: self.model_type.name(),
                                }))
                            }
                        },
                    }
                }
                acc += value;
            }
            y_out[i] = acc;
        }
        Ok(y_out.slice(s![self.max_lag..]).to_owned())
    }

    /// Generic path: re-expand a sliding `max_lag + 1` window through
    /// the basis at every step and take the single resulting row.
    fn free_run_transform(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
        horizon: usize,
    ) -> Result<Array1<f64>, OfrError> {
        let window = self.max_lag + 1;
        let mut y_out = Array1::zeros(horizon);
        y_out
            .slice_mut(s![..self.max_lag])
            .assign(&y.slice(s![..self.max_lag]));

        for i in 0..horizon - self.max_lag {
            let y_window = y_out.slice(s![i..i + window]).to_owned();
            let x_window = x.map(|inputs| inputs.slice(s![i..i + window, ..]).to_owned());
            let lagged = build_lagged_matrix(
                x_window.as_ref(),
                &y_window,
                &self.xlag,
                &self.ylag,
                self.model_type,
            )?;
            let psi = self
                .basis
                .transform(&lagged, self.max_lag, Some(&self.pivot))?;
            y_out[i + self.max_lag] = psi.row(0).dot(&self.theta);
        }
        Ok(y_out.slice(s![self.max_lag..]).to_owned())
    }

    /// n-step-ahead prediction: free-run windows of `steps_ahead`
    /// samples, each reseeded from the measured values.
    fn n_step_ahead(
        &self,
        x: Option<&Array2<f64>>,
        y: &Array1<f64>,
        steps_ahead: usize,
    ) -> Result<Array1<f64>, OfrError> {
        let n = y.len();
        let max_lag = self.max_lag;
        let mut yhat = Array1::zeros(n);
        yhat.slice_mut(s![..max_lag]).assign(&y.slice(s![..max_lag]));

        let mut i = max_lag;
        while i < n {
            let seed_start = i - max_lag;
            // The last window shrinks to whatever samples remain.
            let steps = steps_ahead.min(n - i);
            let y_window = y.slice(s![seed_start..i + steps]).to_owned();
            let x_window = x.map(|inputs| inputs.slice(s![seed_start..i + steps, ..]).to_owned());
            let horizon = if x.is_some() { None } else { Some(steps) };
            let tail = self.free_run(x_window.as_ref(), &y_window, horizon)?;
            yhat.slice_mut(s![i..i + steps]).assign(&tail);
            i += steps;
        }
        Ok(yhat.slice(s![max_lag..]).to_owned())
    }
}
