//! Integration tests for OfrError variants surfaced through the API.

use ndarray::{Array1, Array2};

use sysid_basis::{Basis, BasisError, ModelType};
use sysid_estimate::LeastSquares;
use sysid_ofr::{InfoCriterion, Ofr, OfrConfig, OfrError};

fn toy_series(n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|k| (k as f64 * 0.3).sin()))
}

#[test]
fn error_invalid_config_at_construction() {
    let err = Ofr::new(
        OfrConfig::new().with_n_terms(0),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap_err();
    assert!(matches!(err, OfrError::InvalidNTerms));

    let err = Ofr::new(
        OfrConfig::new().with_eps(f64::NAN),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap_err();
    assert!(matches!(err, OfrError::InvalidEps { .. }));

    let err = Ofr::new(
        OfrConfig::new().with_ylag(vec![]),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap_err();
    assert!(matches!(err, OfrError::Basis(BasisError::EmptyLagList)));
}

#[test]
fn error_missing_input_for_narmax() {
    let model = Ofr::new(
        OfrConfig::new().with_n_terms(2),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap();
    let y = toy_series(50);
    let err = model.fit(None, &y).unwrap_err();
    assert!(matches!(err, OfrError::Basis(BasisError::MissingInput { .. })));
}

#[test]
fn error_length_mismatch() {
    let model = Ofr::new(
        OfrConfig::new().with_n_terms(2),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap();
    let y = toy_series(50);
    let x = Array2::zeros((40, 1));
    let err = model.fit(Some(&x), &y).unwrap_err();
    assert!(matches!(
        err,
        OfrError::Basis(BasisError::LengthMismatch { x_len: 40, y_len: 50 })
    ));
}

#[test]
fn error_series_shorter_than_lags() {
    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nar)
            .with_ylag(5)
            .with_n_terms(1),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();
    let y = toy_series(4);
    let err = model.fit(None, &y).unwrap_err();
    assert!(matches!(
        err,
        OfrError::Basis(BasisError::InsufficientSamples { .. })
    ));
}

#[test]
fn error_unknown_criterion_string() {
    let err = "AIC".parse::<InfoCriterion>().unwrap_err();
    assert!(matches!(err, OfrError::UnknownCriterion { got } if got == "AIC"));
}

#[test]
fn error_predict_zero_steps() {
    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nar)
            .with_ylag(2)
            .with_n_terms(2),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();
    let y = toy_series(100);
    let fit = model.fit(None, &y).unwrap();
    assert!(matches!(
        fit.predict(None, &y, Some(0), None),
        Err(OfrError::InvalidStepsAhead)
    ));
}

#[test]
fn error_predict_empty_target() {
    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nar)
            .with_ylag(2)
            .with_n_terms(2),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();
    let y = toy_series(100);
    let fit = model.fit(None, &y).unwrap();
    let empty = Array1::zeros(0);
    assert!(matches!(
        fit.predict(None, &empty, Some(1), None),
        Err(OfrError::EmptyTarget)
    ));
}

#[test]
fn errors_format_for_operators() {
    // Messages carry the offending values, not just variant names.
    let e = OfrError::InsufficientInitialConditions { got: 1, min: 4 };
    assert!(e.to_string().contains("got 1"));
    assert!(e.to_string().contains("at least 4"));
}
