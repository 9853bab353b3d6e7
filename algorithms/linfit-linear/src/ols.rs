//! Ordinary Least Squares
use crate::error::{LinearError, Result};
use linfit::dataset::DatasetBase;
use linfit::traits::{Fit, PredictInplace};
use linfit::Float;
use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Method used to solve the least-squares problem
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// `slope = Cov(x, y) / Var(x)` on centered data
    Covariance,
    /// Solve the 2x2 system `XᵀX β = Xᵀy` of the intercept-augmented design matrix
    NormalEquations,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::Covariance
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// An ordinary least squares linear regression model for a single feature.
///
/// LinearRegression fits a line to minimize the residual sum of squares between the observed
/// targets in the dataset, and the targets predicted by the line.
///
/// Ordinary least squares regression solves the overconstrained model
///
/// y = ax + b
///
/// by finding a and b which minimize the L_2 norm ||y - ax - b||_2. Both solvers compute the
/// exact minimizer in closed form, no iterative optimization is involved.
///
/// ## Examples
///
/// ```rust
/// use linfit::traits::{Fit, Predict};
/// use linfit::Dataset;
/// use linfit_linear::LinearRegression;
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 3., 5.]);
/// let model = LinearRegression::default().fit(&dataset).unwrap();
/// let pred = model.predict(&dataset);
/// let metrics = dataset.evaluate(&pred).unwrap();
/// println!("slope {}, r2 {}", model.slope(), metrics.r2);
/// ```
pub struct LinearRegression {
    fit_intercept: bool,
    solver: Solver,
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// A fitted line which can be used for making predictions.
pub struct FittedLinearRegression<F> {
    slope: F,
    intercept: F,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression::new()
    }
}

/// Configure and fit a linear regression model
impl LinearRegression {
    /// Create a default linear regression model.
    /// By default, an intercept will be fitted with the covariance solver.
    pub fn new() -> LinearRegression {
        LinearRegression {
            fit_intercept: true,
            solver: Solver::Covariance,
        }
    }

    /// Configure the linear regression model to fit an intercept.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.fit_intercept = intercept;
        self
    }

    /// Select the method solving the least-squares problem. Only used when an intercept is
    /// fitted, a line through the origin has a single closed form.
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }
}

impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>, LinearError> for LinearRegression
{
    type Object = FittedLinearRegression<F>;

    /// Fit a line given a feature matrix `X` and a target variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, 1)`
    ///
    /// The target variable `y` must have shape `(n_samples)`
    ///
    /// With an intercept at least two samples with different `x` are needed, otherwise the fit
    /// fails with `NotEnoughSamples` or `ZeroVariance`. Without intercept a single sample with
    /// non-zero `x` suffices.
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        let (n_samples, n_features) = dataset.records().dim();
        let y = dataset.targets();

        if n_features != 1 {
            return Err(LinearError::MultipleFeatures(n_features));
        }
        if y.len() != n_samples {
            return Err(linfit::Error::MismatchedShapes(n_samples, y.len()).into());
        }

        let needed = if self.fit_intercept { 2 } else { 1 };
        if n_samples < needed {
            return Err(LinearError::NotEnoughSamples {
                needed,
                found: n_samples,
            });
        }

        let x = dataset.feature(0);
        let (slope, intercept) = if self.fit_intercept {
            check_spread(x)?;
            match self.solver {
                Solver::Covariance => solve_covariance(x, y.view())?,
                Solver::NormalEquations => solve_normal_equations(x, y.view())?,
            }
        } else {
            (solve_through_origin(x, y.view())?, F::zero())
        };

        debug!(
            "fitted y = {} * x + {} on {} samples ({:?})",
            slope, intercept, n_samples, self.solver
        );

        Ok(FittedLinearRegression { slope, intercept })
    }
}

/// Fails unless at least two `x` values differ
fn check_spread<F: Float>(x: ArrayView1<F>) -> Result<()> {
    let first = x[0];
    if x.iter().all(|v| *v == first) {
        return Err(LinearError::ZeroVariance(first.to_string()));
    }

    Ok(())
}

/// Slope from the covariance of centered data, the intercept moves the line through the means
fn solve_covariance<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> Result<(F, F)> {
    let n = F::cast(x.len());
    let (x_mean, y_mean) = (x.sum() / n, y.sum() / n);

    let x_centered = &x - x_mean;
    let y_centered = &y - y_mean;

    let s_xx = x_centered.dot(&x_centered);
    if !(s_xx > F::zero()) {
        return Err(LinearError::ZeroVariance(x_mean.to_string()));
    }

    let slope = x_centered.dot(&y_centered) / s_xx;

    Ok((slope, y_mean - slope * x_mean))
}

/// Solve
///
/// | Σx²  Σx | |slope    |   | Σxy |
/// | Σx   n  | |intercept| = | Σy  |
///
/// with Cramer's rule. The sums are taken over `x - x̄` and `y - ȳ`, raw sums of data far from
/// the origin cancel in the determinant. The intercept is shifted back afterwards.
fn solve_normal_equations<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> Result<(F, F)> {
    let n = F::cast(x.len());
    let (x_mean, y_mean) = (x.sum() / n, y.sum() / n);

    let x_centered = &x - x_mean;
    let y_centered = &y - y_mean;

    let (s_x, s_y) = (x_centered.sum(), y_centered.sum());
    let s_xx = x_centered.dot(&x_centered);
    let s_xy = x_centered.dot(&y_centered);

    let det = n * s_xx - s_x * s_x;
    if !(det > F::zero()) {
        return Err(LinearError::ZeroVariance(x_mean.to_string()));
    }

    let slope = (n * s_xy - s_x * s_y) / det;
    let centered_intercept = (s_xx * s_y - s_x * s_xy) / det;

    Ok((slope, y_mean + centered_intercept - slope * x_mean))
}

/// Slope of the line through the origin, `Σxy / Σx²`
fn solve_through_origin<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> Result<F> {
    let s_xx = x.dot(&x);
    if !(s_xx > F::zero()) {
        return Err(LinearError::ZeroVariance(F::zero().to_string()));
    }

    Ok(x.dot(&y) / s_xx)
}

/// View the fitted parameters and make predictions with a fitted line
impl<F: Float> FittedLinearRegression<F> {
    /// Get the fitted slope
    pub fn slope(&self) -> F {
        self.slope
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, 1)`, `predict` returns the value of
    /// the fitted line for every sample.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(x.ncols(), 1, "A fitted line predicts from a single feature.");

        *y = x.column(0).mapv(|x| self.slope * x + self.intercept);
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix1>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given a sequence of `x` values, `predict` returns `slope * x + intercept` for each
    fn predict_inplace(&self, x: &ArrayBase<D, Ix1>, y: &mut Array1<F>) {
        assert_eq!(
            x.len(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        *y = x.mapv(|x| self.slope * x + self.intercept);
    }

    fn default_target(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        Array1::zeros(x.len())
    }
}
