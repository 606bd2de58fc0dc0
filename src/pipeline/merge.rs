use chrono::NaiveDate;

use super::observation::{Observation, SeriesKind};

/// Concatenates the actual series and the (already weekday-filtered)
/// forecast series into the unified table the charts draw from.
pub fn merge(actual: &[Observation], forecast: &[Observation]) -> Vec<Observation> {
    let mut merged = Vec::with_capacity(actual.len() + forecast.len());
    merged.extend_from_slice(actual);
    merged.extend_from_slice(forecast);
    merged
}

/// Rows on or after `cutoff`. Used for the 30-day main chart window.
pub fn filter_from(observations: &[Observation], cutoff: NaiveDate) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| o.date >= cutoff)
        .cloned()
        .collect()
}

/// Inclusive date-range filter backing the secondary chart.
pub fn filter_range(
    observations: &[Observation],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| o.date >= start && o.date <= end)
        .cloned()
        .collect()
}

/// Min and max date over the table, if it has any rows.
pub fn span(observations: &[Observation]) -> Option<(NaiveDate, NaiveDate)> {
    let min = observations.iter().map(|o| o.date).min()?;
    let max = observations.iter().map(|o| o.date).max()?;
    Some((min, max))
}

/// Segment joining the last actual point to the first forecast point on or
/// after it. `None` when either endpoint is missing; the caller surfaces
/// that as a warning and omits the connector.
pub fn connector(
    actual: &[Observation],
    forecast: &[Observation],
) -> Option<(Observation, Observation)> {
    let last_actual = actual.iter().max_by_key(|o| o.date)?.clone();
    let first_forecast = forecast
        .iter()
        .filter(|o| o.date >= last_actual.date)
        .min_by_key(|o| o.date)?
        .clone();
    Some((last_actual, first_forecast))
}
