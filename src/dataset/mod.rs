//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, NdFloat};

use num_traits::{FromPrimitive, NumCast};

use std::iter::Sum;

mod impl_dataset;
mod impl_records;
mod iter;

pub use iter::SampleIter;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in both records and
/// targets of a regression dataset.
pub trait Float:
    NdFloat + FromPrimitive + Default + Sum + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and the targets observed for them. In order to keep the type complexity low the dataset base
/// is only generic over the records and targets and introduces a trait bound on the records.
/// `feature_names` are always owned and copied when views are created.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures). For a simple
/// regression problem this is the design matrix with a single column holding `x`
/// * `targets`: a one-dimensional array with dimensionality (nsamples) holding `y`
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// # Trait bounds
///
/// * `R: Records`: generic over owned and viewed feature matrices
/// * `T`: generic over any `ndarray` array which can be used as targets
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used type of dataset. Records are stored as an `Array2` and each record
/// corresponds to a single target stored in an `Array1`.
pub type Dataset<D, T> = DatasetBase<Array2<D>, Array1<T>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, D, T> = DatasetBase<ArrayView2<'a, D>, ArrayView1<'a, T>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}
