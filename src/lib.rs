//! `linfit` fits straight lines through noisy data with ordinary least squares.
//!
//! The crate is the shared core of a small workspace:
//!
//! * `linfit` (this crate) provides the [`DatasetBase`](dataset::DatasetBase) container, the
//! [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits, parameter checking through
//! [`ParamGuard`] and the regression metrics in [`metrics`].
//! * `linfit-datasets` generates synthetic `y = a * x + b + noise` datasets.
//! * `linfit-linear` estimates slope and intercept in closed form.
//! * `linfit-cli` chains generation, fitting and evaluation on the command line.
//!
//! A whole cycle looks like
//!
//! ```ignore
//! let dataset = LinearNoiseParams::new().slope(2.5).noise(0.0).check()?.generate();
//! let model = LinearRegression::new().fit(&dataset)?;
//! let metrics = dataset.evaluate(&model.predict(&dataset))?;
//! ```
//!
//! Every step is a pure function of its inputs, nothing is cached between cycles.

pub mod dataset;
pub mod error;
mod metrics_regression;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::{EvaluationMetrics, Regression};
}
