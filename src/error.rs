//! Error types in linfit
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    /// Expected and actual number of values
    #[error("mismatched shapes: expected {0} values, got {1}")]
    MismatchedShapes(usize, usize),
    #[error("undefined metric {0}")]
    UndefinedMetric(String),
    #[error("not enough samples to compute the metric")]
    NotEnoughSamples,
}
