//! An error when fitting a line
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting a line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearError {
    #[error("at least {needed} samples needed, but got {found}")]
    NotEnoughSamples { needed: usize, found: usize },
    /// Every x value is the same, the normal equations are singular
    #[error("x has no spread, every value equals {0}")]
    ZeroVariance(String),
    #[error("expected a single feature, but got {0}")]
    MultipleFeatures(usize),
    #[error(transparent)]
    BaseCrate(#[from] linfit::Error),
}
