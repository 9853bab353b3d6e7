use linfit::prelude::*;
use linfit_datasets::generate::LinearNoiseParams;
use linfit_linear::{LinearRegression, Result};

fn main() -> Result<()> {
    // draw 100 points of y = 2.5 * x + 50 with a noise standard deviation of 10
    let dataset = LinearNoiseParams::new()
        .slope(2.5)
        .intercept(50.0)
        .noise(10.0)
        .seed(42)
        .check()?
        .generate();

    let model = LinearRegression::new().fit(&dataset)?;

    // the estimates are close to, but not exactly, the true parameters
    println!("slope:     {:.4}", model.slope());
    println!("intercept: {:.4}", model.intercept());

    let pred = model.predict(&dataset);
    let metrics = dataset.evaluate(&pred)?;

    println!("mse: {:.2}", metrics.mse);
    println!("r2:  {:.4}", metrics.r2);

    Ok(())
}
