use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::observation::{Observation, SeriesKind};

/// Realized accuracy of yesterday's H+1 prediction: what was predicted for
/// `target_date` against what actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionCheck {
    /// Date the prediction targeted (the day before the last actual date)
    pub target_date: NaiveDate,
    /// Value predicted for that date by yesterday's forecast run
    pub predicted: f64,
    /// Observed value for that date
    pub actual: f64,
    /// Signed delta, actual minus predicted
    pub error: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Naik,
    Turun,
    Stabil,
}

/// Mean of the last 7 actual values against the mean of the next 7 forecast
/// values, with the qualitative label derived from strict comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendSummary {
    pub last_7_actual_mean: f64,
    pub next_7_forecast_mean: f64,
    pub label: TrendLabel,
}

/// Looks up the prediction made for `target_date` in yesterday's snapshot and
/// the realized actual for the same date. Either side missing means no
/// metric; the caller degrades that into a warning.
pub fn prediction_check(
    actual: &[Observation],
    forecast_yesterday: &[Observation],
    target_date: NaiveDate,
) -> Option<PredictionCheck> {
    let predicted = forecast_yesterday
        .iter()
        .find(|o| o.date == target_date)?
        .value;
    let realized = actual.iter().find(|o| o.date == target_date)?.value;
    Some(PredictionCheck {
        target_date,
        predicted,
        actual: realized,
        error: realized - predicted,
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sorted_values(observations: &[Observation], kind: SeriesKind) -> Vec<(NaiveDate, f64)> {
    let mut points: Vec<_> = observations
        .iter()
        .filter(|o| o.kind == kind)
        .map(|o| (o.date, o.value))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points
}

/// Trailing vs leading 7-day means. Takes fewer than 7 when fewer exist;
/// an empty side yields no summary rather than a fabricated label.
pub fn trend_summary(actual: &[Observation], forecast: &[Observation]) -> Option<TrendSummary> {
    let actual_points = sorted_values(actual, SeriesKind::Actual);
    let forecast_points = sorted_values(forecast, SeriesKind::Forecast);

    let tail_start = actual_points.len().saturating_sub(7);
    let last_actual: Vec<f64> = actual_points[tail_start..].iter().map(|(_, v)| *v).collect();
    let next_forecast: Vec<f64> = forecast_points
        .iter()
        .take(7)
        .map(|(_, v)| *v)
        .collect();

    let last_7_actual_mean = mean(&last_actual)?;
    let next_7_forecast_mean = mean(&next_forecast)?;

    let label = if next_7_forecast_mean > last_7_actual_mean {
        TrendLabel::Naik
    } else if next_7_forecast_mean < last_7_actual_mean {
        TrendLabel::Turun
    } else {
        TrendLabel::Stabil
    };

    Some(TrendSummary {
        last_7_actual_mean,
        next_7_forecast_mean,
        label,
    })
}
