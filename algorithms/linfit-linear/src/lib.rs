//!
//! `linfit-linear` fits straight lines with ordinary least squares.
//!
//! ## The Big Picture
//!
//! `linfit-linear` is the regression engine of the `linfit` workspace. It takes a
//! [`linfit::Dataset`] with a single feature and estimates slope and intercept in closed form,
//! either from the covariance of the centered data or by solving the normal equations of the
//! intercept-augmented design matrix. Both give the same line up to rounding.
//!
//! ## Current state
//!
//! `linfit-linear` currently provides
//! - Ordinary Least Squares with or without intercept
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example noisy_line
//! ```

mod error;
mod ols;

pub use error::*;
pub use ols::*;
