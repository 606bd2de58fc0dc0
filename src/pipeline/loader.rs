use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use super::observation::{retain_weekdays, Observation};
use super::{PipelineError, Result, ACTUAL_FILE, BACKUP_DIR, FORECAST_LATEST_FILE, FORECAST_YESTERDAY_FILE};

#[derive(Debug, Deserialize)]
struct ActualRecord {
    date: NaiveDate,
    usd_idr: f64,
}

/// Row shape shared by the latest, yesterday, and backup forecast files.
#[derive(Debug, Deserialize)]
struct ForecastRecord {
    date: NaiveDate,
    predicted_usd_idr: f64,
}

/// The three series a dashboard render starts from, plus the warnings
/// accumulated while recovering the yesterday snapshot.
#[derive(Debug)]
pub struct DataSources {
    pub actual: Vec<Observation>,
    pub forecast: Vec<Observation>,
    pub forecast_yesterday: Vec<Observation>,
    pub warnings: Vec<String>,
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Loads all three sources from `data_dir`.
///
/// The actual and latest-forecast files are required; the yesterday snapshot
/// degrades through the backup fallback into warnings instead of errors.
/// Forecast rows falling on a weekend are dropped here, before anything
/// downstream sees them.
pub fn load(data_dir: &Path) -> Result<DataSources> {
    if !data_dir.is_dir() {
        return Err(PipelineError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("data directory not found: {}", data_dir.display()),
        )));
    }

    let actual: Vec<Observation> = read_records::<ActualRecord>(&data_dir.join(ACTUAL_FILE))?
        .into_iter()
        .map(|r| Observation::actual(r.date, r.usd_idr))
        .collect();

    let forecast = retain_weekdays(
        read_records::<ForecastRecord>(&data_dir.join(FORECAST_LATEST_FILE))?
            .into_iter()
            .map(|r| Observation::forecast(r.date, r.predicted_usd_idr))
            .collect(),
    );

    let mut warnings = Vec::new();
    let forecast_yesterday = load_yesterday_snapshot(data_dir, &actual, &mut warnings);

    debug!(
        actual = actual.len(),
        forecast = forecast.len(),
        forecast_yesterday = forecast_yesterday.len(),
        "loaded data sources"
    );

    Ok(DataSources {
        actual,
        forecast,
        forecast_yesterday,
        warnings,
    })
}

/// Reads yesterday's forecast snapshot, falling back to the dated backup
/// file when the primary is unreadable or empty. Every failure path records
/// a distinct warning and leaves the series empty.
fn load_yesterday_snapshot(
    data_dir: &Path,
    actual: &[Observation],
    warnings: &mut Vec<String>,
) -> Vec<Observation> {
    let primary = data_dir.join(FORECAST_YESTERDAY_FILE);
    let rows = match read_records::<ForecastRecord>(&primary) {
        Ok(rows) => retain_weekdays(
            rows.into_iter()
                .map(|r| Observation::forecast(r.date, r.predicted_usd_idr))
                .collect(),
        ),
        Err(e) => {
            warnings.push(format!("Gagal membaca prediksi kemarin: {e}"));
            Vec::new()
        }
    };
    if !rows.is_empty() {
        return rows;
    }

    // The backup file is keyed by the date its prediction row targets, which
    // is the day before the last actual date.
    let Some(last_actual_date) = actual.iter().map(|o| o.date).max() else {
        return Vec::new();
    };
    let yesterday = last_actual_date - Duration::days(1);
    let backup_path = data_dir.join(BACKUP_DIR).join(format!("{yesterday}.csv"));

    match read_records::<ForecastRecord>(&backup_path) {
        Ok(rows) => {
            let recovered: Vec<Observation> = rows
                .into_iter()
                .filter(|r| r.date == yesterday)
                .map(|r| Observation::forecast(r.date, r.predicted_usd_idr))
                .collect();
            if recovered.is_empty() {
                warnings.push(format!(
                    "Backup ditemukan ({}), tapi tidak memuat prediksi untuk {yesterday}.",
                    backup_path.display()
                ));
            }
            recovered
        }
        Err(e) => {
            debug!("backup read failed ({}): {e}", backup_path.display());
            warnings.push("Gagal membaca backup prediksi dari kemarin.".to_string());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{fixture_dir, write_csv, write_default_fixtures};

    #[test]
    fn loads_all_three_sources() {
        let dir = fixture_dir("loader-all");
        write_default_fixtures(&dir);

        let sources = load(&dir).unwrap();
        assert_eq!(sources.actual.len(), 7);
        // Two weekend rows dropped from the seven forecast rows
        assert_eq!(sources.forecast.len(), 5);
        assert_eq!(sources.forecast_yesterday.len(), 2);
        assert!(sources.warnings.is_empty());
    }

    #[test]
    fn comment_lines_are_skipped() {
        let dir = fixture_dir("loader-comments");
        write_default_fixtures(&dir);
        std::fs::write(
            dir.join(ACTUAL_FILE),
            "# export header\ndate,usd_idr\n2025-01-09,16120.0\n# trailing note\n2025-01-10,16150.0\n",
        )
        .unwrap();

        let sources = load(&dir).unwrap();
        assert_eq!(sources.actual.len(), 2);
    }

    #[test]
    fn missing_actual_file_is_an_error() {
        let dir = fixture_dir("loader-missing-actual");
        write_default_fixtures(&dir);
        std::fs::remove_file(dir.join(ACTUAL_FILE)).unwrap();

        assert!(load(&dir).is_err());
    }

    #[test]
    fn missing_yesterday_snapshot_warns_and_falls_back_to_backup() {
        let dir = fixture_dir("loader-backup");
        write_default_fixtures(&dir);
        std::fs::remove_file(dir.join(FORECAST_YESTERDAY_FILE)).unwrap();
        // Last actual date in the default fixtures is 2025-01-10
        write_csv(
            &dir.join(BACKUP_DIR).join("2025-01-09.csv"),
            "date,predicted_usd_idr",
            &[("2025-01-09", 16110.0), ("2025-01-10", 16140.0)],
        );

        let sources = load(&dir).unwrap();
        assert_eq!(sources.forecast_yesterday.len(), 1);
        assert_eq!(
            sources.forecast_yesterday[0].date,
            "2025-01-09".parse::<NaiveDate>().unwrap()
        );
        assert_eq!(sources.forecast_yesterday[0].value, 16110.0);
        // Primary read failure is still reported
        assert_eq!(sources.warnings.len(), 1);
    }

    #[test]
    fn backup_without_the_targeted_row_warns_and_stays_empty() {
        let dir = fixture_dir("loader-backup-miss");
        write_default_fixtures(&dir);
        std::fs::remove_file(dir.join(FORECAST_YESTERDAY_FILE)).unwrap();
        write_csv(
            &dir.join(BACKUP_DIR).join("2025-01-09.csv"),
            "date,predicted_usd_idr",
            &[("2025-01-10", 16140.0)],
        );

        let sources = load(&dir).unwrap();
        assert!(sources.forecast_yesterday.is_empty());
        assert!(sources
            .warnings
            .iter()
            .any(|w| w.contains("tidak memuat prediksi")));
    }

    #[test]
    fn missing_backup_file_warns_and_stays_empty() {
        let dir = fixture_dir("loader-no-backup");
        write_default_fixtures(&dir);
        std::fs::remove_file(dir.join(FORECAST_YESTERDAY_FILE)).unwrap();

        let sources = load(&dir).unwrap();
        assert!(sources.forecast_yesterday.is_empty());
        assert!(sources
            .warnings
            .iter()
            .any(|w| w.contains("backup prediksi")));
    }
}
