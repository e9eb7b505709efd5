//! # sysid-ofr
//!
//! Orthogonal forward regression (OFR) for NARMAX model structure
//! selection.
//!
//! Given measured input/output records, the algorithm ranks a candidate
//! regressor library by error reduction ratio (ERR), greedily selecting
//! the terms that explain the most remaining output variance. A
//! Householder reflection after each pick decorrelates the unselected
//! candidates from it, so per-term ERR contributions are additive. The
//! number of terms comes from an information-criterion search over model
//! sizes (the elbow of the AIC/BIC/... curve), a fixed `n_terms`, or a
//! cumulative-ERR tolerance.
//!
//! ```text
//! Ofr::fit()
//!   ├─ build_lagged_matrix()          (sysid-basis)
//!   ├─ Basis::fit()                   (sysid-basis)
//!   ├─ OrderSearch                    (order.rs, optional)
//!   │    └─ error_reduction_ratio() + Estimator per size
//!   ├─ error_reduction_ratio()        (selection.rs)
//!   └─ Estimator::optimize()          (sysid-estimate)
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use ndarray::{Array1, Array2};
//! use sysid_basis::Basis;
//! use sysid_estimate::LeastSquares;
//! use sysid_ofr::{Ofr, OfrConfig, OfrError};
//!
//! # fn data() -> (Array2<f64>, Array1<f64>) { unimplemented!() }
//! let (x, y) = data();
//! let model = Ofr::new(
//!     OfrConfig::new().with_ylag(vec![1, 2]).with_xlag(2),
//!     LeastSquares,
//!     Basis::polynomial(2),
//! )?;
//! let fit = model.fit(Some(&x), &y)?;
//! for (term, theta) in fit.final_model().iter().zip(fit.theta()) {
//!     println!("{term}: {theta:.4}");
//! }
//! let yhat = fit.predict(Some(&x), &y, Some(1), None)?;
//! # let _ = yhat;
//! # Ok::<(), OfrError>(())
//! ```

mod config;
mod criteria;
mod error;
mod fit;
mod householder;
mod order;
mod predict;
mod selection;

pub use config::OfrConfig;
pub use criteria::{min_info_index, InfoCriterion};
pub use error::OfrError;
pub use fit::{Ofr, OfrFit};
pub use selection::{error_reduction_ratio, Selection};
