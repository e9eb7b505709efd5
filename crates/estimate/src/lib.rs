//! # sysid-estimate
//!
//! Parameter estimation for NARMAX identification.
//!
//! All estimators implement the [`Estimator`] capability trait:
//! `optimize()` maps an information matrix and target to coefficients,
//! `unbiased()` marks estimators whose coefficients need the extended
//! least squares correction pass ([`unbiased_estimator()`]), and
//! `ridge_alpha()` exposes the regularization coefficient that the
//! selection engine folds into its ERR scores.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::{array, Array2};
//! use sysid_estimate::{Estimator, LeastSquares};
//!
//! let psi = Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0]).unwrap();
//! let y = array![1.0, 3.0, 5.0];
//! let theta = LeastSquares.optimize(&psi, &y)?;
//! assert!((theta[1] - 2.0).abs() < 1e-10);
//! # Ok::<(), sysid_estimate::EstimateError>(())
//! ```

mod error;
mod estimator;
mod least_squares;
mod recursive;
mod ridge;
mod solve;
mod unbiased;

pub use error::EstimateError;
pub use estimator::Estimator;
pub use least_squares::LeastSquares;
pub use recursive::RecursiveLeastSquares;
pub use ridge::RidgeRegression;
pub use solve::solve_least_squares;
pub use unbiased::unbiased_estimator;
