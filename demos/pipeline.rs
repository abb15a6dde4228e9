//! Example running a small processing pipeline with progress reporting.

use stride::iter::{progress_filter, progress_map, progress_reduce};
use stride::progress::{ProgressBarOpts, ProgressContext};
use stride::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = ProgressBarOpts::with_detailed_style();

    // Synthetic sensor readings.
    let readings: Vec<f64> = (0..500)
        .map(|i| (f64::from(i) * 0.37).sin().abs() * 100.0)
        .collect();

    let calibrated = progress_map(|r| r * 1.25, readings, "Calibrating", &opts);
    let valid = progress_filter(|r| *r > 5.0, calibrated, "Validating", &opts);
    let total = progress_reduce(|a, b| a + b, valid.clone(), Some(0.0), "Aggregating", &opts)?;

    let mut ctx = ProgressContext::new(
        valid.len() as u64,
        "Summarizing",
        &ProgressBarOpts::with_metrics_style(),
    );
    let mut running = 0.0;
    for (idx, value) in valid.iter().enumerate() {
        running += value;
        if idx % 50 == 0 {
            ctx.set_postfix([("mean", running / (idx + 1) as f64)]);
        }
        ctx.update(1);
    }
    ctx.finish();

    println!("Processed {} valid readings, total {:.2}", valid.len(), total);
    Ok(())
}
