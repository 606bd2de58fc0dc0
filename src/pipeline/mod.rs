//! Request-scoped data pipeline: load CSV sources, normalize them into
//! observations, merge, and derive the dashboard metrics. Everything here is
//! synchronous and rebuilt from the files on every run; no state survives
//! between invocations.

pub mod loader;
pub mod merge;
pub mod metrics;
pub mod observation;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;
use tracing::warn;

use loader::DataSources;
use merge::connector;
use metrics::{prediction_check, trend_summary, PredictionCheck, TrendSummary};
use observation::Observation;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

pub const ACTUAL_FILE: &str = "usd_idr_actual.csv";
pub const FORECAST_LATEST_FILE: &str = "usd_idr_pred_latest.csv";
pub const FORECAST_YESTERDAY_FILE: &str = "usd_idr_pred_yesterday.csv";
pub const BACKUP_DIR: &str = "usd_idr_pred_backup";

/// Everything a single dashboard render needs, computed in one pass.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub actual: Vec<Observation>,
    pub forecast: Vec<Observation>,
    pub merged: Vec<Observation>,
    /// Last 30 days of actual data plus all forecast rows.
    pub window: Vec<Observation>,
    /// Segment joining the last actual point to the first forecast point.
    pub connector: Option<(Observation, Observation)>,
    pub prediction: Option<PredictionCheck>,
    pub trend: Option<TrendSummary>,
    pub warnings: Vec<String>,
}

impl DashboardData {
    pub fn last_actual_date(&self) -> Option<NaiveDate> {
        self.actual.iter().map(|o| o.date).max()
    }
}

/// Runs the whole pipeline against a data directory.
///
/// Only the actual and latest-forecast sources are load-bearing; every other
/// failure path degrades into a warning carried on the result.
pub fn run(data_dir: &std::path::Path, today: NaiveDate) -> Result<DashboardData> {
    let DataSources {
        actual,
        forecast,
        forecast_yesterday,
        mut warnings,
    } = loader::load(data_dir)?;

    let merged = merge::merge(&actual, &forecast);

    let last_actual_date = actual.iter().map(|o| o.date).max();
    let window = match last_actual_date {
        Some(last) => merge::filter_from(&merged, last - Duration::days(30)),
        None => merged.clone(),
    };

    let connector = connector(&actual, &forecast);
    if !actual.is_empty() && connector.is_none() {
        warnings.push("Prediksi tidak tersedia untuk tanggal setelah data aktual terakhir.".to_string());
    }

    let prediction = last_actual_date.and_then(|last| {
        let yesterday = last - Duration::days(1);
        let check = prediction_check(&actual, &forecast_yesterday, yesterday);
        if check.is_none() {
            warnings.push(format!(
                "Tidak ada prediksi dari kemarin untuk tanggal {yesterday}."
            ));
        }
        check
    });

    let trend = trend_summary(&actual, &forecast);
    if trend.is_none() {
        warnings.push("Data tidak cukup untuk menghitung tren.".to_string());
    }

    if matches!(today.weekday(), Weekday::Sat | Weekday::Sun) {
        warnings.push("Hari ini perdagangan libur (weekend).".to_string());
    }

    for w in &warnings {
        warn!("{w}");
    }

    Ok(DashboardData {
        actual,
        forecast,
        merged,
        window,
        connector,
        prediction,
        trend,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{fixture_dir, write_default_fixtures};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn run_assembles_the_full_view() {
        let dir = fixture_dir("run-full");
        write_default_fixtures(&dir);

        // A Wednesday, so no holiday banner
        let data = run(&dir, date("2025-01-15")).unwrap();

        assert_eq!(data.merged.len(), 12);
        assert_eq!(data.window.len(), 12);
        assert_eq!(data.last_actual_date(), Some(date("2025-01-10")));
        assert!(data.warnings.is_empty());

        let (from, to) = data.connector.unwrap();
        assert_eq!(from.date, date("2025-01-10"));
        assert_eq!(to.date, date("2025-01-13"));

        let prediction = data.prediction.unwrap();
        assert_eq!(prediction.target_date, date("2025-01-09"));
        assert_eq!(prediction.error, 10.0);

        assert_eq!(data.trend.unwrap().label, metrics::TrendLabel::Naik);
    }

    #[test]
    fn weekend_run_carries_the_holiday_banner() {
        let dir = fixture_dir("run-weekend");
        write_default_fixtures(&dir);

        let data = run(&dir, date("2025-01-11")).unwrap();

        assert!(data
            .warnings
            .iter()
            .any(|w| w.contains("perdagangan libur")));
    }

    #[test]
    fn stale_forecast_only_warns() {
        let dir = fixture_dir("run-stale");
        write_default_fixtures(&dir);
        crate::test_utils::test_utils::write_csv(
            &dir.join(FORECAST_LATEST_FILE),
            "date,predicted_usd_idr",
            &[("2025-01-09", 16110.0)],
        );

        let data = run(&dir, date("2025-01-15")).unwrap();

        assert!(data.connector.is_none());
        assert!(data
            .warnings
            .iter()
            .any(|w| w.contains("Prediksi tidak tersedia")));
    }
}
