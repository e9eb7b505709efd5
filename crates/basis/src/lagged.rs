//! Lagged information-matrix construction.

use ndarray::{Array1, Array2};

use crate::error::BasisError;
use crate::lag::Lag;
use crate::model_type::ModelType;

/// Builds the lagged signal matrix consumed by basis-function expansion.
///
/// Columns are the lagged signals in regressor-code order: output lags
/// first (in `ylag` order), then each input's lags (in `xlag` order).
/// NAR models take only output lags, NFIR models only input lags. Row
/// `t` holds the values that predict sample `t`; the first rows
/// reference zero-padded history, so consumers slice rows `max_lag..`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::EmptySeries`] | `y` is empty |
/// | [`BasisError::InvalidLag`] / [`BasisError::EmptyLagList`] | an invalid lag specification |
/// | [`BasisError::MissingInput`] | NARMAX/NFIR without `x` |
/// | [`BasisError::LengthMismatch`] | `x` and `y` lengths differ |
/// | [`BasisError::InsufficientSamples`] | series shorter than `max_lag + 1` |
pub fn build_lagged_matrix(
    x: Option<&Array2<f64>>,
    y: &Array1<f64>,
    xlag: &Lag,
    ylag: &Lag,
    model_type: ModelType,
) -> Result<Array2<f64>, BasisError> {
    if y.is_empty() {
        return Err(BasisError::EmptySeries);
    }

    let n = y.len();
    let mut max_lag = 0;
    if model_type.uses_output() {
        ylag.validate()?;
        max_lag = max_lag.max(ylag.max());
    }

    let input = if model_type.uses_input() {
        xlag.validate()?;
        max_lag = max_lag.max(xlag.max());
        let x = x.ok_or(BasisError::MissingInput {
            model_type: model_type.name(),
        })?;
        if x.nrows() != n {
            return Err(BasisError::LengthMismatch {
                x_len: x.nrows(),
                y_len: n,
            });
        }
        Some(x)
    } else {
        None
    };

    if n < max_lag + 1 {
        return Err(BasisError::InsufficientSamples {
            n,
            min: max_lag + 1,
            max_lag,
        });
    }

    let mut columns: Vec<Array1<f64>> = Vec::new();
    if model_type.uses_output() {
        for lag in ylag.lags() {
            columns.push(shift(y.as_slice().expect("contiguous y"), lag));
        }
    }
    if let Some(x) = input {
        for i in 0..x.ncols() {
            let col = x.column(i).to_owned();
            for lag in xlag.lags() {
                columns.push(shift(col.as_slice().expect("contiguous column"), lag));
            }
        }
    }

    let mut lagged = Array2::zeros((n, columns.len()));
    for (j, col) in columns.into_iter().enumerate() {
        lagged.column_mut(j).assign(&col);
    }
    Ok(lagged)
}

/// Shifts a series down by `lag` samples, zero-filling the head.
fn shift(series: &[f64], lag: usize) -> Array1<f64> {
    let mut out = Array1::zeros(series.len());
    for t in lag..series.len() {
        out[t] = series[t - lag];
    }
    out
}
