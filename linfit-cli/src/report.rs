use crate::cli::Format;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Everything a single generate, fit and evaluate cycle produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub n_points: usize,
    pub seed: Option<u64>,
    pub noise: f64,
    pub preview: Vec<Sample>,
    pub true_slope: f64,
    pub true_intercept: f64,
    pub slope: f64,
    pub intercept: f64,
    pub mse: f64,
    pub r2: f64,
    pub mae: f64,
    pub max_error: f64,
}

impl Report {
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Text => Ok(self.to_string()),
            Format::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "generated {} points (noise {})", self.n_points, self.noise)?;
        if !self.preview.is_empty() {
            writeln!(f, "{:>12} {:>12}", "x", "y")?;
            for sample in &self.preview {
                writeln!(f, "{:>12.4} {:>12.4}", sample.x, sample.y)?;
            }
        }
        writeln!(
            f,
            "slope:     {:.4} (true {})",
            self.slope, self.true_slope
        )?;
        writeln!(
            f,
            "intercept: {:.4} (true {})",
            self.intercept, self.true_intercept
        )?;
        writeln!(f, "mse:       {:.2}", self.mse)?;
        writeln!(f, "r2:        {:.4}", self.r2)?;
        writeln!(f, "mae:       {:.2}", self.mae)?;
        write!(f, "max error: {:.2}", self.max_error)
    }
}
