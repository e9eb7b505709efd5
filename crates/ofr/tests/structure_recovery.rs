//! Structure recovery on synthetic systems with known term sets.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sysid_basis::{Basis, ModelType, Term};
use sysid_estimate::LeastSquares;
use sysid_ofr::{Ofr, OfrConfig};

/// Simulates y(k) = 0.2 x(k-2) + 0.9 y(k-2) + 0.1 x(k-1) y(k-1)
///                + 0.3 x(k-2) y(k-2) - 0.7 y(k-1)^2
/// driven by uniform input, noise free.
fn narmax_test_data(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut y = vec![0.0; n];
    for k in 2..n {
        y[k] = 0.2 * x[k - 2] + 0.9 * y[k - 2] + 0.1 * x[k - 1] * y[k - 1]
            + 0.3 * x[k - 2] * y[k - 2]
            - 0.7 * y[k - 1] * y[k - 1];
    }
    let x = Array2::from_shape_vec((n, 1), x).unwrap();
    (x, Array1::from_vec(y))
}

fn theta_for(fit: &sysid_ofr::OfrFit, term: &Term) -> f64 {
    let position = fit
        .final_model()
        .iter()
        .position(|t| t == term)
        .unwrap_or_else(|| panic!("term {term} not selected"));
    fit.theta()[position]
}

#[test]
fn narmax_exact_term_recovery() {
    let (x, y) = narmax_test_data(1000, 42);
    let model = Ofr::new(
        OfrConfig::new()
            .with_ylag(vec![1, 2])
            .with_xlag(2)
            .with_n_info_values(5)
            .with_n_terms(5),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap();

    let fit = model.fit(Some(&x), &y).unwrap();

    assert_eq!(fit.n_terms(), 5);
    let expected = [
        (Term::new(vec![2002, 0]), 0.2),
        (Term::new(vec![1002, 0]), 0.9),
        (Term::new(vec![2001, 1001]), 0.1),
        (Term::new(vec![2002, 1002]), 0.3),
        (Term::new(vec![1001, 1001]), -0.7),
    ];
    for (term, coefficient) in &expected {
        let estimated = theta_for(&fit, term);
        assert!(
            (estimated - coefficient).abs() < 1e-8,
            "{term}: expected {coefficient}, got {estimated}"
        );
    }

    // Noise-free data: the selected terms explain essentially all of
    // the output variance.
    let total_err: f64 = fit.err().iter().sum();
    assert!(total_err > 0.999, "cumulative ERR {total_err}");
}

#[test]
fn err_is_sorted_within_greedy_steps() {
    let (x, y) = narmax_test_data(1000, 42);
    let model = Ofr::new(
        OfrConfig::new()
            .with_ylag(vec![1, 2])
            .with_xlag(2)
            .with_n_terms(5),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap();

    let fit = model.fit(Some(&x), &y).unwrap();
    // The first pick always carries the largest single-term ERR.
    let first = fit.err()[0];
    assert!(fit.err().iter().all(|&e| e <= first));
}

#[test]
fn err_tol_truncates_selection() {
    let (x, y) = narmax_test_data(1000, 42);
    let model = Ofr::new(
        OfrConfig::new()
            .with_ylag(vec![1, 2])
            .with_xlag(2)
            .with_n_terms(5)
            .with_err_tol(0.5),
        LeastSquares,
        Basis::polynomial(2),
    )
    .unwrap();

    let fit = model.fit(Some(&x), &y).unwrap();
    assert!(fit.n_terms() < 5);
    let cumulative: f64 = fit.err().iter().sum();
    assert!(cumulative >= 0.5);
}

#[test]
fn nar_recovery_ignores_missing_input() {
    let n = 600;
    let mut rng = StdRng::seed_from_u64(7);
    let mut y = vec![0.1; n];
    y[1] = -0.2;
    for k in 2..n {
        let e: f64 = rng.gen_range(-0.01..0.01);
        y[k] = 0.5 * y[k - 1] - 0.3 * y[k - 2] + e + 0.02;
    }
    let y = Array1::from_vec(y);

    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nar)
            .with_ylag(2)
            .with_n_terms(3),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();

    let fit = model.fit(None, &y).unwrap();
    assert_eq!(fit.model_type(), ModelType::Nar);

    let a1 = theta_for(&fit, &Term::new(vec![1001]));
    let a2 = theta_for(&fit, &Term::new(vec![1002]));
    assert!((a1 - 0.5).abs() < 0.05, "a1 = {a1}");
    assert!((a2 + 0.3).abs() < 0.05, "a2 = {a2}");
    // No input codes can appear in a NAR model.
    assert!(fit
        .final_model()
        .iter()
        .flat_map(|t| t.codes())
        .all(|&c| c < 2000));
}

#[test]
fn nfir_recovery_has_no_output_feedback() {
    let n = 400;
    let mut rng = StdRng::seed_from_u64(11);
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut y = vec![0.0; n];
    for k in 2..n {
        y[k] = 0.4 * x[k - 1] + 0.2 * x[k - 2];
    }
    let x = Array2::from_shape_vec((n, 1), x).unwrap();
    let y = Array1::from_vec(y);

    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nfir)
            .with_xlag(2)
            .with_n_terms(2),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();

    let fit = model.fit(Some(&x), &y).unwrap();
    let b1 = theta_for(&fit, &Term::new(vec![2001]));
    let b2 = theta_for(&fit, &Term::new(vec![2002]));
    assert!((b1 - 0.4).abs() < 1e-10);
    assert!((b2 - 0.2).abs() < 1e-10);
    assert!(fit
        .final_model()
        .iter()
        .flat_map(|t| t.codes())
        .all(|&c| c == 0 || c >= 2000));
}

#[test]
fn multi_input_codes_identify_each_channel() {
    let n = 500;
    let mut rng = StdRng::seed_from_u64(3);
    let mut data = Vec::with_capacity(n * 2);
    for _ in 0..n {
        data.push(rng.gen_range(-1.0..1.0));
        data.push(rng.gen_range(-1.0..1.0));
    }
    let x = Array2::from_shape_vec((n, 2), data).unwrap();
    let mut y = vec![0.0; n];
    for k in 1..n {
        y[k] = 0.7 * x[[k - 1, 0]] - 0.4 * x[[k - 1, 1]];
    }
    let y = Array1::from_vec(y);

    let model = Ofr::new(
        OfrConfig::new()
            .with_model_type(ModelType::Nfir)
            .with_xlag(1)
            .with_n_terms(2),
        LeastSquares,
        Basis::polynomial(1),
    )
    .unwrap();

    let fit = model.fit(Some(&x), &y).unwrap();
    let b0 = theta_for(&fit, &Term::new(vec![2001]));
    let b1 = theta_for(&fit, &Term::new(vec![3001]));
    assert!((b0 - 0.7).abs() < 1e-10);
    assert!((b1 + 0.4).abs() < 1e-10);
}
