use clap::{Parser, ValueEnum};
use linfit::Error;
use linfit_datasets::generate::{LinearNoiseParams, MAX_POINTS};
use linfit_linear::{LinearRegression, Solver};
use std::convert::TryFrom;

#[derive(Debug, Parser)]
#[command(
    name = "linfit",
    about = "Fit a least-squares line to synthetic y = a * x + b + noise data",
    version
)]
pub struct Cli {
    /// Slope `a` of the true line
    #[arg(long, default_value_t = 2.5, allow_negative_numbers = true)]
    pub slope: f64,

    /// Intercept `b` of the true line
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub intercept: f64,

    /// Standard deviation of the Gaussian noise
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub noise: f64,

    /// Number of generated points
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub points: i64,

    /// Lower end of the x domain
    #[arg(long = "domain-min", default_value_t = 0.0, allow_negative_numbers = true)]
    pub domain_min: f64,

    /// Upper end of the x domain
    #[arg(long = "domain-max", default_value_t = 100.0, allow_negative_numbers = true)]
    pub domain_max: f64,

    /// Seed for reproducible noise, fresh entropy if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Least-squares solver
    #[arg(long, value_enum, default_value_t = SolverArg::Covariance)]
    pub solver: SolverArg,

    /// Fit a line through the origin
    #[arg(long = "no-intercept")]
    pub no_intercept: bool,

    /// Number of leading samples echoed in the report
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverArg {
    Covariance,
    NormalEquations,
}

impl From<SolverArg> for Solver {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Covariance => Solver::Covariance,
            SolverArg::NormalEquations => Solver::NormalEquations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Unchecked generation parameters, negative point counts are rejected here since they do
    /// not fit the generator's `usize`
    pub fn generation_params(&self) -> Result<LinearNoiseParams<f64>, Error> {
        let n_points = usize::try_from(self.points).map_err(|_| {
            Error::Parameters(format!(
                "number of points should be between 1 and {}, but is {}",
                MAX_POINTS, self.points
            ))
        })?;

        let params = LinearNoiseParams::new()
            .slope(self.slope)
            .intercept(self.intercept)
            .noise(self.noise)
            .n_points(n_points)
            .domain(self.domain_min, self.domain_max);

        Ok(match self.seed {
            Some(seed) => params.seed(seed),
            None => params,
        })
    }

    pub fn regression(&self) -> LinearRegression {
        LinearRegression::new()
            .with_intercept(!self.no_intercept)
            .with_solver(self.solver.into())
    }
}
