use super::{iter::SampleIter, DatasetBase, DatasetView, Float, Records};
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix1, Ix2};

/// Implementation without constraints on records and targets
///
/// This implementation block provides a few accessors and the constructor. Additional
/// functionality for `ndarray` records and targets lives in the block below.
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Number of samples in the dataset
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of features per sample
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// when printing a preview of the data.
    ///
    /// If no names were set, `feature-{idx}` is used.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.records.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        let feature_names = names.into_iter().map(|x| x.into()).collect();

        self.feature_names = feature_names;

        self
    }
}

impl<F: Float, D: Data<Elem = F>, S: Data<Elem = F>>
    DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F, F> {
        DatasetBase::new(self.records.view(), self.targets.view())
            .with_feature_names(self.feature_names.clone())
    }

    /// Returns a view on the values of a single feature
    ///
    /// # Panics
    ///
    /// If `idx` is not smaller than the number of features.
    pub fn feature(&self, idx: usize) -> ArrayView1<'_, F> {
        self.records.index_axis(Axis(1), idx)
    }

    /// Iterate over `(record, target)` pairs in sample order
    pub fn sample_iter(&self) -> SampleIter<'_, F> {
        SampleIter::new(self.records.view(), self.targets.view())
    }
}

impl<R: Records, T> From<(R, T)> for DatasetBase<R, T> {
    fn from(rec_tar: (R, T)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}
