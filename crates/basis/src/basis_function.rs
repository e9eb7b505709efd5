//! Basis-function expansion of lagged signals into candidate regressors.

use ndarray::{Array1, Array2};

use crate::error::BasisError;
use crate::lag::Lag;
use crate::model_type::ModelType;
use crate::term::{regressor_space, Term};

/// Polynomial basis: all monomials of the lagged signals up to `degree`,
/// constant term included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    degree: usize,
}

impl Polynomial {
    /// Creates a polynomial basis of the given degree.
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// Returns the polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }
}

/// Fourier basis: cos/sin pairs of each lagged signal's harmonics.
/// No constant column.
#[derive(Debug, Clone, PartialEq)]
pub struct Fourier {
    n: usize,
    p: f64,
}

impl Fourier {
    /// Creates a Fourier basis with `n` harmonics and period `p`.
    pub fn new(n: usize, p: f64) -> Self {
        Self { n, p }
    }

    /// Returns the number of harmonics.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the period.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Closed dispatch over the supported basis families.
///
/// The polynomial variant is the fast path: its columns are direct
/// products of lagged signals, so a fitted model can be re-evaluated
/// sample-by-sample from regressor codes alone. Other variants are
/// re-evaluated through [`Basis::transform()`] at prediction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Basis {
    /// Polynomial expansion.
    Polynomial(Polynomial),
    /// Fourier expansion.
    Fourier(Fourier),
}

impl Basis {
    /// Creates a polynomial basis of the given degree.
    pub fn polynomial(degree: usize) -> Self {
        Basis::Polynomial(Polynomial::new(degree))
    }

    /// Creates a Fourier basis with `n` harmonics and period `p`.
    pub fn fourier(n: usize, p: f64) -> Self {
        Basis::Fourier(Fourier::new(n, p))
    }

    /// Returns `true` for the polynomial fast path.
    pub fn is_polynomial(&self) -> bool {
        matches!(self, Basis::Polynomial(_))
    }

    /// Evaluates the candidate regressor columns over rows `max_lag..`
    /// of the lagged matrix.
    ///
    /// With `selected = Some(indices)` only those candidate columns are
    /// evaluated, in the given order (used at prediction time to
    /// restrict Ψ to a final model's terms).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BasisError::InvalidBasisParameter`] | zero degree / harmonic count |
    /// | [`BasisError::RegressorOutOfRange`] | a selected index beyond the library |
    pub fn fit(
        &self,
        lagged: &Array2<f64>,
        max_lag: usize,
        selected: Option<&[usize]>,
    ) -> Result<Array2<f64>, BasisError> {
        match self {
            Basis::Polynomial(p) => polynomial_expand(p, lagged, max_lag, selected),
            Basis::Fourier(f) => fourier_expand(f, lagged, max_lag, selected),
        }
    }

    /// Re-evaluates candidate columns for prediction. Identical to
    /// [`Basis::fit()`]; kept as a separate operation because fitting
    /// and prediction call it at different points of the lifecycle.
    pub fn transform(
        &self,
        lagged: &Array2<f64>,
        max_lag: usize,
        selected: Option<&[usize]>,
    ) -> Result<Array2<f64>, BasisError> {
        self.fit(lagged, max_lag, selected)
    }

    /// Returns the regressor-code table aligned with this basis's
    /// candidate columns, position for position.
    pub fn codes(
        &self,
        xlag: &Lag,
        ylag: &Lag,
        n_inputs: usize,
        model_type: ModelType,
    ) -> Vec<Term> {
        match self {
            Basis::Polynomial(p) => {
                regressor_space(p.degree, xlag, ylag, n_inputs, model_type)
            }
            Basis::Fourier(f) => {
                let linear = regressor_space(1, xlag, ylag, n_inputs, model_type);
                // Skip the constant; each signal yields a cos/sin pair per harmonic.
                linear
                    .into_iter()
                    .skip(1)
                    .flat_map(|t| std::iter::repeat(t).take(2 * f.n))
                    .collect()
            }
        }
    }
}

/// Enumerates all non-decreasing index tuples of length `degree` over
/// `0..n_candidates` (combinations with repetition, lexicographic).
fn combinations_with_repetition(n_candidates: usize, degree: usize) -> Vec<Vec<usize>> {
    let mut combos = Vec::new();
    let mut combo = vec![0usize; degree];
    loop {
        combos.push(combo.clone());
        let mut pos = degree;
        loop {
            if pos == 0 {
                return combos;
            }
            pos -= 1;
            if combo[pos] + 1 < n_candidates {
                let next = combo[pos] + 1;
                for slot in combo.iter_mut().skip(pos) {
                    *slot = next;
                }
                break;
            }
        }
    }
}

fn polynomial_expand(
    basis: &Polynomial,
    lagged: &Array2<f64>,
    max_lag: usize,
    selected: Option<&[usize]>,
) -> Result<Array2<f64>, BasisError> {
    if basis.degree == 0 {
        return Err(BasisError::InvalidBasisParameter { parameter: "degree" });
    }

    // Candidate 0 is the constant 1; candidate j+1 is lagged column j.
    let combos = combinations_with_repetition(lagged.ncols() + 1, basis.degree);
    let picked = resolve_selection(selected, combos.len())?;

    let rows = lagged.nrows() - max_lag;
    let mut psi = Array2::zeros((rows, picked.len()));
    for (out_col, &combo_idx) in picked.iter().enumerate() {
        let combo = &combos[combo_idx];
        let mut column = Array1::from_elem(rows, 1.0);
        for &candidate in combo {
            if candidate == 0 {
                continue;
            }
            for r in 0..rows {
                column[r] *= lagged[[max_lag + r, candidate - 1]];
            }
        }
        psi.column_mut(out_col).assign(&column);
    }
    Ok(psi)
}

fn fourier_expand(
    basis: &Fourier,
    lagged: &Array2<f64>,
    max_lag: usize,
    selected: Option<&[usize]>,
) -> Result<Array2<f64>, BasisError> {
    if basis.n == 0 {
        return Err(BasisError::InvalidBasisParameter { parameter: "n" });
    }

    let n_columns = lagged.ncols() * 2 * basis.n;
    let picked = resolve_selection(selected, n_columns)?;

    let rows = lagged.nrows() - max_lag;
    let mut psi = Array2::zeros((rows, picked.len()));
    for (out_col, &idx) in picked.iter().enumerate() {
        let signal = idx / (2 * basis.n);
        let harmonic = (idx % (2 * basis.n)) / 2 + 1;
        let is_sin = idx % 2 == 1;
        for r in 0..rows {
            let phase =
                2.0 * std::f64::consts::PI * lagged[[max_lag + r, signal]] * harmonic as f64
                    / basis.p;
            psi[[r, out_col]] = if is_sin { phase.sin() } else { phase.cos() };
        }
    }
    Ok(psi)
}

fn resolve_selection(
    selected: Option<&[usize]>,
    n_columns: usize,
) -> Result<Vec<usize>, BasisError> {
    match selected {
        None => Ok((0..n_columns).collect()),
        Some(indices) => {
            if let Some(&index) = indices.iter().find(|&&i| i >= n_columns) {
                return Err(BasisError::RegressorOutOfRange { index, n_columns });
            }
            Ok(indices.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use crate::lagged::build_lagged_matrix;

    fn small_lagged() -> Array2<f64> {
        let y = array![1.0, 2.0, 3.0, 4.0];
        let x = Array2::from_shape_vec((4, 1), vec![10.0, 20.0, 30.0, 40.0]).unwrap();
        build_lagged_matrix(Some(&x), &y, &Lag::from(1), &Lag::from(1), ModelType::Narmax)
            .unwrap()
    }

    #[test]
    fn polynomial_columns_match_code_order() {
        let lagged = small_lagged();
        let basis = Basis::polynomial(2);
        let psi = basis.fit(&lagged, 1, None).unwrap();
        let codes = basis.codes(&Lag::from(1), &Lag::from(1), 1, ModelType::Narmax);

        // 3 candidates (constant, y(k-1), x(k-1)) choose 2 with repetition.
        assert_eq!(psi.ncols(), 6);
        assert_eq!(codes.len(), 6);

        // Row for sample 2: y(k-1)=2, x(k-1)=20.
        assert_abs_diff_eq!(psi[[1, 0]], 1.0); // constant
        assert_abs_diff_eq!(psi[[1, 1]], 2.0); // y(k-1)
        assert_abs_diff_eq!(psi[[1, 2]], 20.0); // x(k-1)
        assert_abs_diff_eq!(psi[[1, 3]], 4.0); // y(k-1)^2
        assert_abs_diff_eq!(psi[[1, 4]], 40.0); // y(k-1)x(k-1)
        assert_abs_diff_eq!(psi[[1, 5]], 400.0); // x(k-1)^2
        assert_eq!(codes[4], Term::new(vec![2001, 1001]));
    }

    #[test]
    fn polynomial_selected_subset() {
        let lagged = small_lagged();
        let basis = Basis::polynomial(2);
        let psi = basis.transform(&lagged, 1, Some(&[4, 1])).unwrap();
        assert_eq!(psi.ncols(), 2);
        assert_abs_diff_eq!(psi[[1, 0]], 40.0);
        assert_abs_diff_eq!(psi[[1, 1]], 2.0);
    }

    #[test]
    fn polynomial_zero_degree_fails() {
        let lagged = small_lagged();
        let err = Basis::polynomial(0).fit(&lagged, 1, None).unwrap_err();
        assert!(matches!(
            err,
            BasisError::InvalidBasisParameter { parameter: "degree" }
        ));
    }

    #[test]
    fn selected_out_of_range_fails() {
        let lagged = small_lagged();
        let err = Basis::polynomial(2)
            .fit(&lagged, 1, Some(&[99]))
            .unwrap_err();
        assert!(matches!(
            err,
            BasisError::RegressorOutOfRange {
                index: 99,
                n_columns: 6
            }
        ));
    }

    #[test]
    fn fourier_pairs_per_signal() {
        let lagged = small_lagged();
        let basis = Basis::fourier(2, 2.0 * std::f64::consts::PI);
        let psi = basis.fit(&lagged, 1, None).unwrap();
        // 2 signals x 2 harmonics x (cos, sin).
        assert_eq!(psi.ncols(), 8);

        // Column 0 is cos(y(k-1)) at harmonic 1; sample 2 has y(k-1)=2.
        assert_abs_diff_eq!(psi[[1, 0]], 2.0_f64.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(psi[[1, 1]], 2.0_f64.sin(), epsilon = 1e-12);
        // Columns 2-3 are the second harmonic.
        assert_abs_diff_eq!(psi[[1, 2]], 4.0_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn fourier_codes_repeat_signals() {
        let basis = Basis::fourier(1, 1.0);
        let codes = basis.codes(&Lag::from(1), &Lag::from(1), 1, ModelType::Narmax);
        assert_eq!(codes.len(), 4);
        assert_eq!(codes[0], Term::new(vec![1001]));
        assert_eq!(codes[1], Term::new(vec![1001]));
        assert_eq!(codes[2], Term::new(vec![2001]));
    }

    #[test]
    fn fourier_zero_harmonics_fails() {
        let lagged = small_lagged();
        let err = Basis::fourier(0, 1.0).fit(&lagged, 1, None).unwrap_err();
        assert!(matches!(
            err,
            BasisError::InvalidBasisParameter { parameter: "n" }
        ));
    }
}
