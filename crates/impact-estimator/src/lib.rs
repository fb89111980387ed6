//! Quasi-experimental effect estimation over panel data.
//!
//! Two estimators plus the shared statistical primitives:
//!
//! - **DiD**: two-period difference-in-differences over treated/control
//!   group averages
//! - **Synthetic control**: inverse-distance donor weighting with a
//!   pre-period gap correction
//! - **t-test**: pooled-variance two-sample test with a normal-approximation
//!   p-value
//!
//! Every estimate is a pure function of the panel and its parameters.

pub mod did;
pub mod error;
pub mod stats;
pub mod synthetic;

pub use did::DidEstimator;
pub use error::{EstimatorError, Period, Result};
pub use stats::{TTestResult, independent_ttest, mean, normal_cdf, sample_variance};
pub use synthetic::{SyntheticControlEstimate, SyntheticControlEstimator};
