//! `linfit-datasets` generates synthetic datasets for the `linfit` workspace.
//!
//! ## The Big Picture
//!
//! Regression algorithms are easiest to judge on data whose ground truth is known. This crate
//! draws `y = slope * x + intercept + noise` samples on an evenly spaced grid, with Gaussian
//! noise of configurable strength.
//!
//! ## Using a dataset
//!
//! ```ignore
//! use linfit::ParamGuard;
//! use linfit_datasets::generate::LinearNoiseParams;
//!
//! let dataset = LinearNoiseParams::new()
//!     .slope(2.5)
//!     .noise(10.0)
//!     .seed(42)
//!     .check()?
//!     .generate();
//! ```
//!
//! Pass your own random generator to [`generate::linear_with_noise`] to control the source of
//! randomness entirely.

pub mod generate;

pub use generate::{linear_with_noise, LinearNoiseParams, LinearNoiseValidParams, MAX_POINTS};
