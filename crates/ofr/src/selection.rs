//! Greedy orthogonal term selection via error reduction ratios.

use ndarray::{s, Array1, Array2, ArrayView1};

use crate::householder::{house, rowhouse, rowhouse_vec};

/// Result of one selection pass.
///
/// `psi_orthogonal` holds the *original* candidate columns reordered by
/// `pivot`, not the Householder-transformed values: downstream
/// coefficient estimation runs on the raw re-selected regressors while
/// the transformed working copy is discarded.
#[derive(Debug, Clone)]
pub struct Selection {
    err: Vec<f64>,
    pivot: Vec<usize>,
    psi_orthogonal: Array2<f64>,
    n_terms: usize,
}

impl Selection {
    /// ERR contribution of the term picked at each step.
    pub fn err(&self) -> &[f64] {
        &self.err
    }

    /// Indices into the candidate library, in selection order.
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// The selected candidate columns, in selection order.
    pub fn psi_orthogonal(&self) -> &Array2<f64> {
        &self.psi_orthogonal
    }

    /// Number of terms actually selected (may be below the requested
    /// count when an ERR tolerance fires).
    pub fn n_terms(&self) -> usize {
        self.n_terms
    }
}

/// Ranks candidate regressors by error reduction ratio and selects the
/// best `process_term_number` of them.
///
/// At each step the remaining candidates are scored by regularized
/// squared correlation with the (partially orthogonalized) target, the
/// best is swapped to the front, and a Householder reflection
/// decorrelates everything still unselected from it. That reflection is
/// what makes per-step ERR contributions additive and non-redundant.
///
/// `psi` and `y` are the offset training data (rows `max_lag..`); both
/// are copied into private working buffers and never mutated.
///
/// When `err_tol` is set, selection stops once the cumulative ERR
/// reaches it and the term count is retroactively reduced to the steps
/// taken.
pub fn error_reduction_ratio(
    psi: &Array2<f64>,
    y: ArrayView1<'_, f64>,
    process_term_number: usize,
    alpha: f64,
    eps: f64,
    err_tol: Option<f64>,
) -> Selection {
    let squared_y = y.dot(&y);
    let dimension = psi.ncols();

    let mut tmp_psi = psi.clone();
    let mut tmp_y: Array1<f64> = y.to_owned();
    let mut piv: Vec<usize> = (0..dimension).collect();
    let mut tmp_err = vec![0.0; dimension];
    let mut err = vec![0.0; dimension];
    let mut cumulative = 0.0;
    let mut n_terms = process_term_number;

    for i in 0..dimension {
        for j in i..dimension {
            let column = tmp_psi.slice(s![i.., j]);
            let numerator = column.dot(&tmp_y.slice(s![i..]));
            // eps floors the score and guards the division when a
            // column's remaining energy is ~0; alpha is the uniform
            // ridge regularization (UROLS).
            let denominator = (column.dot(&column) + alpha) * squared_y;
            tmp_err[j] = if denominator == 0.0 {
                eps
            } else {
                numerator * numerator / denominator + eps
            };
        }

        let mut piv_index = i;
        for j in i + 1..dimension {
            if tmp_err[j] > tmp_err[piv_index] {
                piv_index = j;
            }
        }
        err[i] = tmp_err[piv_index];

        // Break order is load-bearing: the requested-count check runs
        // after this step's scores, and the tolerance check after it.
        if i == process_term_number {
            break;
        }
        if let Some(tol) = err_tol {
            cumulative += err[i];
            if cumulative >= tol {
                n_terms = i + 1;
                break;
            }
        }

        if piv_index != i {
            swap_columns(&mut tmp_psi, i, piv_index);
            piv.swap(i, piv_index);
        }

        let v = house(tmp_psi.slice(s![i.., i]));
        rowhouse(tmp_psi.slice_mut(s![i.., i..]), &v);
        rowhouse_vec(tmp_y.slice_mut(s![i..]), &v);
    }

    let n_terms = n_terms.min(dimension);
    let pivot: Vec<usize> = piv[..n_terms].to_vec();

    let mut psi_orthogonal = Array2::zeros((psi.nrows(), n_terms));
    for (out_col, &original) in pivot.iter().enumerate() {
        psi_orthogonal
            .column_mut(out_col)
            .assign(&psi.column(original));
    }

    Selection {
        err: err[..n_terms].to_vec(),
        pivot,
        psi_orthogonal,
        n_terms,
    }
}

fn swap_columns(m: &mut Array2<f64>, a: usize, b: usize) {
    for row in 0..m.nrows() {
        m.swap([row, a], [row, b]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    /// Three orthogonal candidates with descending explanatory power
    /// plus a pure-noise column.
    fn toy_problem() -> (Array2<f64>, Array1<f64>) {
        let n = 8;
        let mut psi = Array2::zeros((n, 3));
        let mut y = Array1::zeros(n);
        for k in 0..n {
            let t = k as f64;
            psi[[k, 0]] = if k % 2 == 0 { 1.0 } else { -1.0 };
            psi[[k, 1]] = t;
            psi[[k, 2]] = (t * 1.7).sin();
        }
        for k in 0..n {
            y[k] = 3.0 * psi[[k, 1]] + 0.2 * psi[[k, 0]];
        }
        (psi, y)
    }

    #[test]
    fn lengths_match_requested_count() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 2, 0.0, f64::EPSILON, None);
        assert_eq!(sel.err().len(), 2);
        assert_eq!(sel.pivot().len(), 2);
        assert_eq!(sel.psi_orthogonal().ncols(), 2);
        assert_eq!(sel.n_terms(), 2);
    }

    #[test]
    fn pivot_is_a_permutation_subset() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 3, 0.0, f64::EPSILON, None);
        let mut seen = sel.pivot().to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|&p| p < 3));
    }

    #[test]
    fn strongest_term_is_selected_first() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 2, 0.0, f64::EPSILON, None);
        assert_eq!(sel.pivot()[0], 1);
        assert!(sel.err()[0] > 0.9);
    }

    #[test]
    fn err_values_are_positive_and_bounded() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 3, 0.0, f64::EPSILON, None);
        let total: f64 = sel.err().iter().sum();
        assert!(sel.err().iter().all(|&e| e > 0.0));
        assert!(total <= 1.0 + 16.0 * f64::EPSILON + 1e-9);
    }

    #[test]
    fn caller_data_is_not_mutated() {
        let (psi, y) = toy_problem();
        let psi_before = psi.clone();
        let y_before = y.clone();
        let _ = error_reduction_ratio(&psi, y.view(), 3, 0.0, f64::EPSILON, None);
        assert_eq!(psi, psi_before);
        assert_eq!(y, y_before);
    }

    #[test]
    fn orthogonal_psi_holds_original_columns() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 2, 0.0, f64::EPSILON, None);
        for (out_col, &original) in sel.pivot().iter().enumerate() {
            for row in 0..psi.nrows() {
                assert_relative_eq!(
                    sel.psi_orthogonal()[[row, out_col]],
                    psi[[row, original]]
                );
            }
        }
    }

    #[test]
    fn err_tol_stops_early() {
        let (psi, y) = toy_problem();
        // The first term alone explains >90% of the variance.
        let sel = error_reduction_ratio(&psi, y.view(), 3, 0.0, f64::EPSILON, Some(0.9));
        assert_eq!(sel.n_terms(), 1);
        assert_eq!(sel.err().len(), 1);
        assert_eq!(sel.pivot().len(), 1);
    }

    #[test]
    fn requested_count_clamped_to_dimension() {
        let (psi, y) = toy_problem();
        let sel = error_reduction_ratio(&psi, y.view(), 10, 0.0, f64::EPSILON, None);
        assert_eq!(sel.n_terms(), 3);
    }

    #[test]
    fn eps_floors_scores_for_degenerate_columns() {
        let n = 6;
        let mut psi = Array2::zeros((n, 2));
        let mut y = Array1::zeros(n);
        for k in 0..n {
            psi[[k, 0]] = k as f64;
            // Column 1 stays all-zero: its self-energy is 0.
            y[k] = 2.0 * k as f64;
        }
        let sel = error_reduction_ratio(&psi, y.view(), 2, 0.0, f64::EPSILON, None);
        assert!(sel.err().iter().all(|e| e.is_finite() && *e > 0.0));
        assert_eq!(sel.pivot()[0], 0);
    }
}
