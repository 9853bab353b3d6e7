//! Command line driver chaining generation, fitting and evaluation
//!
//! A run is one explicit pipeline: check the generation parameters, generate the dataset, fit
//! the line, predict every sample and compare the predictions with the targets.

pub mod cli;
pub mod error;
pub mod report;

use linfit::prelude::*;
use log::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::report::{Report, Sample};

pub fn run(cli: &Cli) -> Result<Report> {
    let params = cli.generation_params()?.check()?;
    let dataset = params.generate();
    info!(
        "generated {} points with seed {:?}",
        dataset.nsamples(),
        params.seed()
    );

    let model = cli.regression().fit(&dataset)?;
    info!(
        "fitted slope {} and intercept {}",
        model.slope(),
        model.intercept()
    );

    let predictions = model.predict(&dataset);
    let metrics = dataset.evaluate(&predictions)?;
    let mae = predictions.mean_absolute_error(dataset.targets())?;
    let max_error = predictions.max_error(dataset.targets())?;

    let preview = dataset
        .sample_iter()
        .take(cli.preview)
        .map(|(x, y)| Sample { x: x[0], y })
        .collect();

    Ok(Report {
        n_points: dataset.nsamples(),
        seed: params.seed(),
        noise: params.noise(),
        preview,
        true_slope: params.slope(),
        true_intercept: params.intercept(),
        slope: model.slope(),
        intercept: model.intercept(),
        mse: metrics.mse,
        r2: metrics.r2,
        mae,
        max_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use crate::error::CliError;
    use approx::assert_abs_diff_eq;
    use clap::{CommandFactory, Parser};

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("linfit").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_follow_the_parameter_panel() {
        let cli = parse(&[]);

        assert_eq!(cli.slope, 2.5);
        assert_eq!(cli.intercept, 50.0);
        assert_eq!(cli.noise, 10.0);
        assert_eq!(cli.points, 100);
        assert_eq!((cli.domain_min, cli.domain_max), (0.0, 100.0));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn noise_free_run() {
        let report = run(&parse(&["--noise", "0", "--points", "5"])).unwrap();

        assert_eq!(report.n_points, 5);
        assert_eq!(report.preview.len(), 5);
        assert_eq!(report.preview[1], Sample { x: 25.0, y: 112.5 });
        assert_abs_diff_eq!(report.slope, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(report.intercept, 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.mse, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.r2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let args = ["--seed", "42", "--slope", "-3.5", "--solver", "normal-equations"];

        assert_eq!(run(&parse(&args)).unwrap(), run(&parse(&args)).unwrap());
    }

    #[test]
    fn preview_is_capped_by_the_dataset() {
        let report = run(&parse(&["--points", "3", "--preview", "10"])).unwrap();

        assert_eq!(report.preview.len(), 3);
    }

    #[test]
    fn invalid_generation_parameters() {
        for args in [
            &["--noise", "-1"][..],
            &["--points", "0"][..],
            &["--points", "-4"][..],
            &["--points", "10000000000000"][..],
        ] {
            let err = run(&parse(args)).unwrap_err();
            assert_eq!(err.kind(), "InvalidParameter", "{:?}", args);
        }
    }

    #[test]
    fn degenerate_datasets() {
        let single = run(&parse(&["--points", "1"])).unwrap_err();
        assert_eq!(single.kind(), "DegenerateInput");

        let collapsed = run(&parse(&["--domain-min", "3", "--domain-max", "3"])).unwrap_err();
        assert_eq!(collapsed.kind(), "DegenerateInput");
        assert!(collapsed.to_string().contains('3'));
    }

    #[test]
    fn flat_noise_free_line_has_undefined_r2() {
        let err = run(&parse(&["--slope", "0", "--noise", "0"])).unwrap_err();

        assert_eq!(err.kind(), "UndefinedMetric");
    }

    #[test]
    fn shape_errors_keep_their_kind() {
        let err = CliError::from(linfit::Error::MismatchedShapes(3, 2));
        assert_eq!(err.kind(), "ShapeMismatch");

        let err = CliError::from(linfit_linear::LinearError::BaseCrate(
            linfit::Error::MismatchedShapes(3, 2),
        ));
        assert_eq!(err.kind(), "ShapeMismatch");
    }

    #[test]
    fn renders_json() {
        let report = run(&parse(&["--seed", "1", "--format", "json"])).unwrap();
        let out = report.render(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["n_points"], 100);
        assert_eq!(value["seed"], 1);
        assert_eq!(value["preview"].as_array().map(|p| p.len()), Some(5));
    }

    #[test]
    fn renders_text() {
        let report = run(&parse(&["--seed", "1", "--preview", "0"])).unwrap();
        let out = report.render(Format::Text).unwrap();

        assert!(out.starts_with("generated 100 points"));
        assert!(out.contains("r2:"));
        assert!(!out.contains("    x "));
    }
}
