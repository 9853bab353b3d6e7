//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables.

use ndarray::prelude::*;
use ndarray::Data;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::{
    dataset::{DatasetBase, Records},
    error::{Error, Result},
    Float,
};

/// Regression metrices trait
///
/// Implemented for predictions, the argument is always the ground truth:
/// ```ignore
/// prediction.r2(&ground_truth)
/// ```
///
/// Every metric fails with `Error::MismatchedShapes` if both sides differ in length and with
/// `Error::NotEnoughSamples` if they are empty.
pub trait Regression<F: Float> {
    /// Maximal error between two continuous variables
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// Mean error between two continuous variables
    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// Undefined if all values of `compare_to` are identical, in which case
    /// `Error::UndefinedMetric` is returned.
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
}

/// Residuals `compare_to - self` after checking that both sides are comparable
fn residuals<F: Float>(prediction: ArrayView1<F>, compare_to: ArrayView1<F>) -> Result<Array1<F>> {
    if prediction.len() != compare_to.len() {
        return Err(Error::MismatchedShapes(compare_to.len(), prediction.len()));
    }
    if compare_to.is_empty() {
        return Err(Error::NotEnoughSamples);
    }

    Ok(&compare_to - &prediction)
}

impl<F: Float, S: Data<Elem = F>> Regression<F> for ArrayBase<S, Ix1> {
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        let residuals = residuals(self.view(), compare_to.view())?;

        Ok(residuals
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        let residuals = residuals(self.view(), compare_to.view())?;

        residuals
            .mapv(|x| x.abs())
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        let residuals = residuals(self.view(), compare_to.view())?;

        residuals
            .mapv(|x| x * x)
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken of `compare_to`, so the denominator compares the ground truth with its
    // own mean, and not the prediction with the mean
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        let residuals = residuals(self.view(), compare_to.view())?;

        let first = compare_to[0];
        if compare_to.iter().all(|y| *y == first) {
            return Err(Error::UndefinedMetric(format!(
                "r2 of constant targets (all equal to {})",
                first
            )));
        }

        let mean = compare_to.mean().ok_or(Error::NotEnoughSamples)?;
        let ss_res = residuals.mapv(|x| x * x).sum();
        let ss_tot = compare_to.mapv(|x| (x - mean) * (x - mean)).sum();

        Ok(F::one() - ss_res / ss_tot)
    }
}

/// Accuracy of a fitted model on the dataset it was evaluated against
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics<F> {
    /// Mean squared error, never negative
    pub mse: F,
    /// Coefficient of determination, at most one
    pub r2: F,
}

impl<F: Float, R: Records, S: Data<Elem = F>> DatasetBase<R, ArrayBase<S, Ix1>> {
    /// Compare `predictions` against the targets of this dataset
    ///
    /// Returns the mean squared error and the coefficient of determination. Fails with
    /// `Error::MismatchedShapes` when the number of predictions differs from the number of
    /// samples and with `Error::UndefinedMetric` when all targets are identical.
    pub fn evaluate<D: Data<Elem = F>>(
        &self,
        predictions: &ArrayBase<D, Ix1>,
    ) -> Result<EvaluationMetrics<F>> {
        let mse = predictions.mean_squared_error(&self.targets)?;
        let r2 = predictions.r2(&self.targets)?;

        Ok(EvaluationMetrics { mse, r2 })
    }
}
