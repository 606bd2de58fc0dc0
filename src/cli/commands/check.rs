use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;
use tracing::{info, warn};

use crate::pipeline;

/// One-shot pipeline run against a data directory. Prints what the dashboard
/// would show and exits non-zero only when the required files are unreadable.
pub fn check(data_dir: &Path) -> Result<()> {
    let data = pipeline::run(data_dir, Local::now().date_naive())
        .with_context(|| format!("pipeline failed for {}", data_dir.display()))?;

    info!(
        "{} actual rows, {} forecast rows, {} merged",
        data.actual.len(),
        data.forecast.len(),
        data.merged.len()
    );
    if let Some(last) = data.last_actual_date() {
        info!("Last actual date: {last}");
    }
    match &data.prediction {
        Some(check) => info!(
            "Prediction for {}: {:.2} (actual {:.2}, error {:+.2})",
            check.target_date, check.predicted, check.actual, check.error
        ),
        None => warn!("No usable prediction from yesterday"),
    }
    match &data.trend {
        Some(trend) => info!(
            "Trend: {:?} (actual mean {:.2}, forecast mean {:.2})",
            trend.label, trend.last_7_actual_mean, trend.next_7_forecast_mean
        ),
        None => warn!("Not enough data to compute a trend"),
    }

    Ok(())
}
