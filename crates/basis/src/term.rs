//! Integer regressor codes and candidate term enumeration.
//!
//! The code scheme follows the NARMAX literature convention:
//! `1000 + l` encodes `y(k-l)`, `1000 * (i + 2) + l` encodes input `i`
//! (0-based) at lag `l`, and `0` encodes the constant 1. A [`Term`] is
//! one candidate regressor: a fixed-degree product of coded signals,
//! stored with the largest code first and zero-padded.

use std::fmt;

use crate::lag::Lag;
use crate::model_type::ModelType;

/// Returns the code for `y(k-lag)`.
pub fn output_code(lag: usize) -> u32 {
    1000 + lag as u32
}

/// Returns the code for input `input` (0-based) at lag `lag`.
pub fn input_code(input: usize, lag: usize) -> u32 {
    1000 * (input as u32 + 2) + lag as u32
}

/// A decoded regressor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The constant 1.
    Constant,
    /// `y(k-lag)`.
    Output {
        /// The lag on the output signal.
        lag: usize,
    },
    /// Input `index` (0-based) at `lag`.
    Input {
        /// 0-based input column.
        index: usize,
        /// The lag on the input signal.
        lag: usize,
    },
}

/// Decodes a regressor code into the signal it references.
pub fn decode(code: u32) -> Signal {
    match code / 1000 {
        0 => Signal::Constant,
        1 => Signal::Output {
            lag: (code % 1000) as usize,
        },
        group => Signal::Input {
            index: (group - 2) as usize,
            lag: (code % 1000) as usize,
        },
    }
}

/// One candidate regressor term: a product of coded lagged signals.
///
/// Codes are stored largest-first and zero-padded to the basis degree,
/// so the degree-2 term `x1(k-1) y(k-1)` is `[2001, 1001]` and the
/// linear term `x1(k-2)` is `[2002, 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(Vec<u32>);

impl Term {
    /// Creates a term from its code row.
    pub fn new(codes: Vec<u32>) -> Self {
        Term(codes)
    }

    /// Returns the code row.
    pub fn codes(&self) -> &[u32] {
        &self.0
    }

    /// Returns `true` if this is the constant term.
    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return f.write_str("1");
        }
        for &code in self.0.iter().filter(|&&c| c != 0) {
            match decode(code) {
                Signal::Constant => {}
                Signal::Output { lag } => write!(f, "y(k-{lag})")?,
                Signal::Input { index, lag } => write!(f, "x{}(k-{lag})", index + 1)?,
            }
        }
        Ok(())
    }
}

/// Enumerates the full candidate term library for a polynomial basis.
///
/// Candidate codes are the constant plus every lagged signal the model
/// type admits, in lagged-matrix column order; terms are all
/// combinations with repetition of `degree` codes, enumerated in
/// lexicographic order. The column order of a polynomial information
/// matrix built from the same lag specs matches this enumeration
/// position-for-position.
pub fn regressor_space(
    degree: usize,
    xlag: &Lag,
    ylag: &Lag,
    n_inputs: usize,
    model_type: ModelType,
) -> Vec<Term> {
    let mut candidates = vec![0u32];
    if model_type.uses_output() {
        candidates.extend(ylag.lags().into_iter().map(output_code));
    }
    if model_type.uses_input() {
        for input in 0..n_inputs {
            candidates.extend(xlag.lags().into_iter().map(|l| input_code(input, l)));
        }
    }

    let mut terms = Vec::new();
    let mut combo = vec![0usize; degree];
    loop {
        let mut codes: Vec<u32> = combo.iter().map(|&idx| candidates[idx]).collect();
        codes.reverse();
        terms.push(Term::new(codes));

        // Advance to the next non-decreasing index tuple.
        let mut pos = degree;
        loop {
            if pos == 0 {
                return terms;
            }
            pos -= 1;
            if combo[pos] + 1 < candidates.len() {
                let next = combo[pos] + 1;
                for slot in combo.iter_mut().skip(pos) {
                    *slot = next;
                }
                break;
            }
        }
    }
}
