//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Records};
use ndarray::{Array1, ArrayBase, Data, Dimension, Ix1};

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// a least-squares fit creates a slope and an intercept which can then be used to predict targets
/// for new records.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}

/// Predict with model into a mutable reference of targets.
pub trait PredictInplace<R, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T);

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model
///
/// This trait assumes the `PredictInplace` implementation and provides additional input/output
/// combinations.
///
/// # Provided implementation
///
/// * Array1 or Array2 -> T
/// * &Dataset -> Array1
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, D, DM, T, O> Predict<&'a ArrayBase<D, DM>, T> for O
where
    D: Data,
    DM: Dimension,
    O: PredictInplace<ArrayBase<D, DM>, T>,
{
    fn predict(&self, records: &'a ArrayBase<D, DM>) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}

impl<'a, F, R, S, O> Predict<&'a DatasetBase<R, ArrayBase<S, Ix1>>, Array1<F>> for O
where
    R: Records,
    S: Data<Elem = F>,
    O: PredictInplace<R, Array1<F>>,
{
    fn predict(&self, ds: &'a DatasetBase<R, ArrayBase<S, Ix1>>) -> Array1<F> {
        let mut targets = self.default_target(&ds.records);
        self.predict_inplace(&ds.records, &mut targets);
        targets
    }
}
