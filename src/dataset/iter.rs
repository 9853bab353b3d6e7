use super::Float;
use ndarray::{ArrayView1, ArrayView2, Axis};

/// Iterator over the `(record, target)` pairs of a dataset
pub struct SampleIter<'a, F> {
    records: ArrayView2<'a, F>,
    targets: ArrayView1<'a, F>,
    idx: usize,
}

impl<'a, F> SampleIter<'a, F> {
    pub fn new(records: ArrayView2<'a, F>, targets: ArrayView1<'a, F>) -> SampleIter<'a, F> {
        SampleIter {
            records,
            targets,
            idx: 0,
        }
    }
}

impl<'a, F: Float> Iterator for SampleIter<'a, F> {
    type Item = (ArrayView1<'a, F>, F);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.records.nrows() || self.idx >= self.targets.len() {
            return None;
        }

        let records = self.records;
        let item = (records.index_axis_move(Axis(0), self.idx), self.targets[self.idx]);
        self.idx += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.nrows().min(self.targets.len()) - self.idx;
        (remaining, Some(remaining))
    }
}

impl<'a, F: Float> ExactSizeIterator for SampleIter<'a, F> {}
