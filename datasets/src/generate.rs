//! Utility functions for randomly generating datasets

use linfit::{Dataset, Error, Float, ParamGuard};
use log::debug;
use ndarray::{Array, Array1, Axis};
use ndarray_rand::{
    rand::{Rng, SeedableRng},
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};
use rand_isaac::Isaac64Rng;

/// Largest number of points a single dataset may hold
pub const MAX_POINTS: usize = 10_000_000;

/// Checked parameters of a noisy linear dataset
///
/// Samples follow `y = slope * x + intercept + noise` where `x` is evenly spaced over `domain`,
/// endpoints included, and `noise` is drawn independently from `Normal(0, noise)` for every
/// sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearNoiseValidParams<F> {
    slope: F,
    intercept: F,
    noise: F,
    n_points: usize,
    domain: (F, F),
    seed: Option<u64>,
}

impl<F: Float> LinearNoiseValidParams<F> {
    pub fn slope(&self) -> F {
        self.slope
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Standard deviation of the Gaussian noise
    pub fn noise(&self) -> F {
        self.noise
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn domain(&self) -> (F, F) {
        self.domain
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate the dataset
    ///
    /// With a seed the noise is drawn from an `Isaac64Rng` seeded by it, so repeated calls return
    /// bit-identical datasets. Without a seed the generator is seeded from the operating system
    /// and every call returns fresh noise.
    pub fn generate(&self) -> Dataset<F, F>
    where
        StandardNormal: Distribution<F>,
    {
        let mut rng = match self.seed {
            Some(seed) => Isaac64Rng::seed_from_u64(seed),
            None => Isaac64Rng::from_entropy(),
        };

        linear_with_noise(self, &mut rng)
    }
}

/// Unchecked parameters of a noisy linear dataset
///
/// Defaults to `y = 2.5 * x + 50 + noise` with a noise standard deviation of `10`, sampled at
/// `100` points over `[0, 100]` without a fixed seed.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearNoiseParams<F>(LinearNoiseValidParams<F>);

impl<F: Float> Default for LinearNoiseParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> LinearNoiseParams<F> {
    pub fn new() -> Self {
        Self(LinearNoiseValidParams {
            slope: F::cast(2.5),
            intercept: F::cast(50.0),
            noise: F::cast(10.0),
            n_points: 100,
            domain: (F::zero(), F::cast(100.0)),
            seed: None,
        })
    }

    /// Slope of the underlying line
    pub fn slope(mut self, slope: F) -> Self {
        self.0.slope = slope;
        self
    }

    /// Intercept of the underlying line
    pub fn intercept(mut self, intercept: F) -> Self {
        self.0.intercept = intercept;
        self
    }

    /// Standard deviation of the Gaussian noise, must not be negative
    pub fn noise(mut self, noise: F) -> Self {
        self.0.noise = noise;
        self
    }

    /// Number of samples, between one and `MAX_POINTS`
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.0.n_points = n_points;
        self
    }

    /// Interval the samples are spread over. The bounds may be given in either order.
    pub fn domain(mut self, lo: F, hi: F) -> Self {
        self.0.domain = (lo, hi);
        self
    }

    /// Fix the seed of the random generator used by `generate`
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = Some(seed);
        self
    }
}

impl<F: Float> ParamGuard for LinearNoiseParams<F> {
    type Checked = LinearNoiseValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let p = &self.0;

        if p.n_points == 0 || p.n_points > MAX_POINTS {
            Err(Error::Parameters(format!(
                "number of points should be between 1 and {}, but is {}",
                MAX_POINTS, p.n_points
            )))
        } else if !(p.noise >= F::zero()) || p.noise.is_infinite() {
            Err(Error::Parameters(format!(
                "noise standard deviation should be non-negative and finite, but is {}",
                p.noise
            )))
        } else if !p.slope.is_finite() {
            Err(Error::Parameters(format!(
                "slope should be finite, but is {}",
                p.slope
            )))
        } else if !p.intercept.is_finite() {
            Err(Error::Parameters(format!(
                "intercept should be finite, but is {}",
                p.intercept
            )))
        } else if !p.domain.0.is_finite() || !p.domain.1.is_finite() {
            Err(Error::Parameters(format!(
                "domain should be finite, but is [{}, {}]",
                p.domain.0, p.domain.1
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Draw a noisy linear dataset using the random generator `rng`
///
/// The records hold a single feature named `x`, evenly spaced over the domain of `params`. A
/// dataset with a single point places it at the lower end of the domain. The targets are
/// `slope * x + intercept` plus one Gaussian noise sample each, so two generators in the same
/// state produce the same dataset.
pub fn linear_with_noise<F, R>(params: &LinearNoiseValidParams<F>, rng: &mut R) -> Dataset<F, F>
where
    F: Float,
    R: Rng + ?Sized,
    StandardNormal: Distribution<F>,
{
    let (lo, hi) = params.domain;
    let mut x = Array1::linspace(lo, hi, params.n_points);
    // `linspace` accumulates `lo + i * step`, which can miss the upper bound by rounding
    if let Some(last) = x.iter_mut().skip(1).last() {
        *last = hi;
    }

    let noise: Array1<F> = Array::random_using(params.n_points, StandardNormal, rng);
    let noise = noise.mapv(|z| z * params.noise);

    let y = x.mapv(|x| params.slope * x + params.intercept) + noise;

    debug!(
        "generated {} points of y = {} * x + {} on [{}, {}] with noise {}",
        params.n_points, params.slope, params.intercept, lo, hi, params.noise
    );

    Dataset::new(x.insert_axis(Axis(1)), y).with_feature_names(vec!["x"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn generates_requested_number_of_points() {
        for n_points in [1, 2, 10, 1000] {
            let dataset = LinearNoiseParams::<f64>::new()
                .n_points(n_points)
                .check_unwrap()
                .generate();

            assert_eq!(dataset.nsamples(), n_points);
            assert_eq!(dataset.targets().len(), n_points);
            assert_eq!(dataset.nfeatures(), 1);
        }
    }

    #[test]
    fn noise_free_points_lie_on_the_line() {
        let dataset = LinearNoiseParams::new()
            .slope(2.5)
            .intercept(50.0)
            .noise(0.0)
            .n_points(5)
            .domain(0.0, 100.0)
            .check_unwrap()
            .generate();

        assert_abs_diff_eq!(dataset.feature(0), array![0., 25., 50., 75., 100.]);
        assert_abs_diff_eq!(
            dataset.targets().to_owned(),
            array![50., 112.5, 175., 237.5, 300.]
        );
        assert_eq!(dataset.feature_names(), vec!["x"]);
    }

    #[test]
    fn same_seed_gives_identical_datasets() {
        let params = LinearNoiseParams::<f64>::new().seed(42).check_unwrap();
        let first = params.generate();
        let second = params.generate();

        assert!(first
            .targets()
            .iter()
            .zip(second.targets().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_noise() {
        let first = LinearNoiseParams::<f64>::new()
            .seed(1)
            .check_unwrap()
            .generate();
        let second = LinearNoiseParams::<f64>::new()
            .seed(2)
            .check_unwrap()
            .generate();

        assert_eq!(first.records(), second.records());
        assert_ne!(first.targets(), second.targets());
    }

    #[test]
    fn unseeded_calls_draw_fresh_noise() {
        let params = LinearNoiseParams::<f64>::new().check_unwrap();

        assert_ne!(params.generate().targets(), params.generate().targets());
    }

    #[test]
    fn explicit_generator_is_reproducible() {
        let params = LinearNoiseParams::<f32>::new().noise(3.0).check_unwrap();

        let mut rng = Isaac64Rng::seed_from_u64(7);
        let first = linear_with_noise(&params, &mut rng);
        let mut rng = Isaac64Rng::seed_from_u64(7);
        let second = linear_with_noise(&params, &mut rng);

        assert_eq!(first, second);
    }

    #[test]
    fn single_point_sits_at_lower_bound() {
        let dataset = LinearNoiseParams::new()
            .n_points(1)
            .noise(0.0)
            .domain(-3.0, 8.0)
            .check_unwrap()
            .generate();

        assert_abs_diff_eq!(dataset.feature(0), array![-3.0]);
        assert_abs_diff_eq!(dataset.targets()[0], 2.5 * -3.0 + 50.0);
    }

    #[test]
    fn reversed_domain_runs_downwards() {
        let dataset = LinearNoiseParams::new()
            .n_points(3)
            .domain(10.0, 0.0)
            .check_unwrap()
            .generate();

        assert_abs_diff_eq!(dataset.feature(0), array![10., 5., 0.]);
    }

    #[test]
    fn rejects_zero_points() {
        let res = LinearNoiseParams::<f64>::new().n_points(0).check();

        assert!(matches!(res, Err(Error::Parameters(_))));
    }

    #[test]
    fn rejects_too_many_points() {
        let res = LinearNoiseParams::<f64>::new().n_points(MAX_POINTS + 1).check();

        match res {
            Err(Error::Parameters(msg)) => assert!(msg.contains(&(MAX_POINTS + 1).to_string())),
            _ => panic!("oversized datasets should be rejected"),
        }
        assert!(LinearNoiseParams::<f64>::new()
            .n_points(MAX_POINTS)
            .check()
            .is_ok());
    }

    #[test]
    fn domain_bounds_are_hit_exactly() {
        for (lo, hi, n_points) in [(0.1, 0.7, 7), (0.3, 0.1, 3), (1e8, 1e8 + 100., 100)] {
            let x = LinearNoiseParams::new()
                .n_points(n_points)
                .domain(lo, hi)
                .check_unwrap()
                .generate()
                .feature(0)
                .to_owned();

            assert_eq!(x[0], lo);
            assert_eq!(x[n_points - 1], hi);
        }
    }

    #[test]
    fn rejects_negative_noise() {
        let res = LinearNoiseParams::<f64>::new().noise(-1.0).check();

        match res {
            Err(Error::Parameters(msg)) => assert!(msg.contains("-1")),
            _ => panic!("negative noise should be rejected"),
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(LinearNoiseParams::<f64>::new().noise(f64::NAN).check().is_err());
        assert!(LinearNoiseParams::<f64>::new()
            .noise(f64::INFINITY)
            .check()
            .is_err());
        assert!(LinearNoiseParams::<f64>::new().slope(f64::NAN).check().is_err());
        assert!(LinearNoiseParams::<f64>::new()
            .intercept(f64::NEG_INFINITY)
            .check()
            .is_err());
        assert!(LinearNoiseParams::<f64>::new()
            .domain(0.0, f64::INFINITY)
            .check()
            .is_err());
    }

    #[test]
    fn check_ref_agrees_with_check() {
        let params = LinearNoiseParams::<f64>::new().slope(-4.0).seed(3);

        let checked = params.check_ref().unwrap().clone();
        assert_eq!(checked, params.check().unwrap());
        assert_abs_diff_eq!(checked.slope(), -4.0);
        assert_eq!(checked.seed(), Some(3));
    }
}
