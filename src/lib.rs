//! The DTLZ family of scalable many-objective test problems.
//!
//! Each problem maps a decision vector in `[0, 1]^dim` to `fdim` objectives
//! whose Pareto front has a known analytic shape, and exposes a convergence
//! metric that is `0.0` exactly on that front.
//!
//! ```
//! use dtlz_suite::Dtlz;
//!
//! let problem = Dtlz::new(1, 5, 3, 100).unwrap();
//!
//! assert_eq!(problem.evaluate(&[0.5; 5]), vec![0.125, 0.125, 0.25]);
//! assert_eq!(problem.distance_to_front(&[0.5; 5]).unwrap(), 0.0);
//! ```

#[macro_use]
extern crate log;

pub mod array_solution;
pub mod config;
pub mod error;
pub mod metric;
pub mod problem;
#[cfg(test)]
mod tests;

pub use crate::config::DtlzConfig;
pub use crate::error::{Error, Result};
pub use crate::problem::dtlz::variant::Variant;
pub use crate::problem::dtlz::Dtlz;
pub use crate::problem::{Population, Problem};
