use linfit_linear::LinearError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Linfit(#[from] linfit::Error),
    #[error(transparent)]
    Linear(#[from] LinearError),
    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Category of the failure as printed on the error stream
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Linfit(e) | CliError::Linear(LinearError::BaseCrate(e)) => match e {
                linfit::Error::Parameters(_) => "InvalidParameter",
                linfit::Error::MismatchedShapes(_, _) => "ShapeMismatch",
                linfit::Error::UndefinedMetric(_) => "UndefinedMetric",
                linfit::Error::NotEnoughSamples => "DegenerateInput",
            },
            CliError::Linear(_) => "DegenerateInput",
            CliError::Json(_) => "Output",
        }
    }
}
