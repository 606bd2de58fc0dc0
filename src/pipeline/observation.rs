use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which series a row came from. Serialized lowercase so the chart legend
/// and the JSON payload match the original column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Actual,
    Forecast,
}

/// One point of either series, in the canonical `{date, value, type}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Observation {
    /// Calendar date of the observation (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Exchange rate in rupiah
    pub value: f64,
    /// Series the row belongs to
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

impl Observation {
    pub fn actual(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            kind: SeriesKind::Actual,
        }
    }

    pub fn forecast(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            kind: SeriesKind::Forecast,
        }
    }
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Drops forecast rows that fall on Saturday/Sunday. Weekend rows are
/// removed, never shifted to the next trading day.
pub fn retain_weekdays(observations: Vec<Observation>) -> Vec<Observation> {
    observations
        .into_iter()
        .filter(|o| is_weekday(o.date))
        .collect()
}
