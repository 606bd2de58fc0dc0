#[cfg(test)]
pub mod test_utils {
    use crate::config::AppConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::pipeline::{ACTUAL_FILE, FORECAST_LATEST_FILE, FORECAST_YESTERDAY_FILE};

    static FIXTURE_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Fresh scratch directory for one test's CSV fixtures.
    pub fn fixture_dir(name: &str) -> PathBuf {
        let seq = FIXTURE_SEQ.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "kurs-dashboard-test-{}-{name}-{seq}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("Failed to create fixture directory");
        dir
    }

    /// Writes a CSV with a leading comment line, the way the nightly export
    /// produces the real files.
    pub fn write_csv(path: &Path, header: &str, rows: &[(&str, f64)]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture parent directory");
        }
        let mut body = format!("# test fixture\n{header}\n");
        for (date, value) in rows {
            body.push_str(&format!("{date},{value}\n"));
        }
        fs::write(path, body).expect("Failed to write fixture CSV");
    }

    /// Standard fixture set used across the tests:
    /// - actual weekdays 2025-01-02 through Friday 2025-01-10
    /// - latest forecast 2025-01-11 (Sat) through 2025-01-17, so two rows
    ///   fall on a weekend and five survive the filter
    /// - yesterday's snapshot covering 2025-01-09 and 2025-01-10
    pub fn write_default_fixtures(dir: &Path) {
        write_csv(
            &dir.join(ACTUAL_FILE),
            "date,usd_idr",
            &[
                ("2025-01-02", 16020.0),
                ("2025-01-03", 16040.0),
                ("2025-01-06", 16060.0),
                ("2025-01-07", 16080.0),
                ("2025-01-08", 16100.0),
                ("2025-01-09", 16120.0),
                ("2025-01-10", 16150.0),
            ],
        );
        write_csv(
            &dir.join(FORECAST_LATEST_FILE),
            "date,predicted_usd_idr",
            &[
                ("2025-01-11", 16135.0),
                ("2025-01-12", 16140.0),
                ("2025-01-13", 16180.0),
                ("2025-01-14", 16210.0),
                ("2025-01-15", 16230.0),
                ("2025-01-16", 16250.0),
                ("2025-01-17", 16270.0),
            ],
        );
        write_csv(
            &dir.join(FORECAST_YESTERDAY_FILE),
            "date,predicted_usd_idr",
            &[("2025-01-09", 16110.0), ("2025-01-10", 16140.0)],
        );
    }

    /// Create axum app for testing, backed by the given fixture directory
    pub fn setup_test_app(data_dir: PathBuf) -> Router {
        let state = AppState {
            config: AppConfig {
                data_dir,
                bind_address: "127.0.0.1:0".to_string(),
            },
        };
        create_router(state)
    }
}
