//! Householder reflections for the selection engine.

use ndarray::{Array1, ArrayView1, ArrayViewMut1, ArrayViewMut2};

/// Computes the Householder reflection vector for a column, normalized
/// so its first component is 1.
///
/// Reflecting with the returned vector zeroes the column below its
/// first entry. A zero column is returned unchanged (the reflection
/// degenerates to the identity).
pub(crate) fn house(x: ArrayView1<'_, f64>) -> Array1<f64> {
    let norm = x.dot(&x).sqrt();
    let mut v = x.to_owned();
    if norm != 0.0 {
        // sign(0) = +1 keeps the pivot away from zero when the leading
        // entry vanishes but the column does not.
        let sign = if x[0] < 0.0 { -1.0 } else { 1.0 };
        let pivot = x[0] + sign * norm;
        for i in 1..v.len() {
            v[i] /= pivot;
        }
        v[0] = 1.0;
    }
    v
}

/// Applies the reflection `(I - 2 v vᵀ / vᵀv)` to every column of `a`
/// in place. A zero reflection vector is the identity.
pub(crate) fn rowhouse(mut a: ArrayViewMut2<'_, f64>, v: &Array1<f64>) {
    let vtv = v.dot(v);
    if vtv == 0.0 {
        return;
    }
    let beta = -2.0 / vtv;
    for j in 0..a.ncols() {
        let dot: f64 = a.column(j).dot(v);
        let w = beta * dot;
        for i in 0..a.nrows() {
            a[[i, j]] += v[i] * w;
        }
    }
}

/// Applies the reflection to a single vector in place.
pub(crate) fn rowhouse_vec(mut y: ArrayViewMut1<'_, f64>, v: &Array1<f64>) {
    let vtv = v.dot(v);
    if vtv == 0.0 {
        return;
    }
    let beta = -2.0 / vtv;
    let dot: f64 = y.dot(v);
    let w = beta * dot;
    for i in 0..y.len() {
        y[i] += v[i] * w;
    }
}
