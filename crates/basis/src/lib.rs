//! # sysid-basis
//!
//! Candidate regressor construction for NARMAX system identification:
//! lag specifications, lagged information matrices, integer regressor
//! codes, and basis-function expansion (polynomial and Fourier).
//!
//! ## Regressor codes
//!
//! Each lagged signal is identified by an integer code: `1000 + l` is
//! `y(k-l)`, `1000 * (i + 2) + l` is input `i` at lag `l`, and `0` is
//! the constant 1. A [`Term`] is a fixed-degree product of coded
//! signals, so `[2001, 1001]` reads as `x1(k-1) y(k-1)`.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::{Array1, Array2};
//! use sysid_basis::{Basis, Lag, ModelType, build_lagged_matrix};
//!
//! let x = Array2::from_shape_vec((6, 1), vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
//! let y = Array1::from(vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
//! let lagged = build_lagged_matrix(Some(&x), &y, &Lag::from(2), &Lag::from(2), ModelType::Narmax)?;
//! let basis = Basis::polynomial(2);
//! let psi = basis.fit(&lagged, 2, None)?;
//! assert_eq!(psi.nrows(), 4);
//! # Ok::<(), sysid_basis::BasisError>(())
//! ```

mod basis_function;
mod error;
mod lag;
mod lagged;
mod model_type;
mod term;

pub use basis_function::{Basis, Fourier, Polynomial};
pub use error::BasisError;
pub use lag::Lag;
pub use lagged::build_lagged_matrix;
pub use model_type::ModelType;
pub use term::{decode, input_code, output_code, regressor_space, Signal, Term};
