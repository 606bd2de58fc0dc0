//! Server-side Plotly figure construction. The handlers ship these JSON
//! figures to the page, which only has to hand them to `Plotly.newPlot`.

use serde_json::{json, Value};

use crate::pipeline::observation::{Observation, SeriesKind};

const ACTUAL_COLOR: &str = "#1f77b4";
const FORECAST_COLOR: &str = "#ff7f0e";
const HOVER_TEMPLATE: &str = "Tanggal: %{x|%d %b %Y}<br>Nilai: Rp %{y:,.2f}";

fn series_points(observations: &[Observation], kind: SeriesKind) -> (Vec<String>, Vec<f64>) {
    observations
        .iter()
        .filter(|o| o.kind == kind)
        .map(|o| (o.date.to_string(), o.value))
        .unzip()
}

fn line_trace(name: &str, x: Vec<String>, y: Vec<f64>, color: &str, dash: &str) -> Value {
    json!({
        "x": x,
        "y": y,
        "type": "scatter",
        "mode": "lines+markers",
        "name": name,
        "line": {"color": color, "dash": dash},
        "hovertemplate": HOVER_TEMPLATE,
    })
}

fn figure(observations: &[Observation], connector: Option<&(Observation, Observation)>, title: &str) -> Value {
    let (actual_x, actual_y) = series_points(observations, SeriesKind::Actual);
    let (forecast_x, forecast_y) = series_points(observations, SeriesKind::Forecast);

    let mut traces = vec![
        line_trace("actual", actual_x, actual_y, ACTUAL_COLOR, "solid"),
        line_trace("forecast", forecast_x, forecast_y, FORECAST_COLOR, "dash"),
    ];

    if let Some((from, to)) = connector {
        traces.push(json!({
            "x": [from.date.to_string(), to.date.to_string()],
            "y": [from.value, to.value],
            "type": "scatter",
            "mode": "lines",
            "line": {"color": FORECAST_COLOR, "dash": "dot"},
            "name": "",
            "showlegend": false,
        }));
    }

    json!({
        "data": traces,
        "layout": {
            "title": title,
            "xaxis": {"title": "Tanggal"},
            "yaxis": {"title": "Nilai Tukar (Rp)"},
        },
    })
}

/// Main chart: 30-day window plus forecast, with the dotted segment joining
/// the last actual point to the first forecast point.
pub fn main_figure(window: &[Observation], connector: Option<&(Observation, Observation)>) -> Value {
    figure(
        window,
        connector,
        "Nilai Tukar USD/IDR - Aktual dan Prediksi (30 Hari + Forecast)",
    )
}

/// Secondary chart re-rendered for each range selection.
pub fn range_figure(filtered: &[Observation]) -> Value {
    figure(filtered, None, "Rentang Waktu yang Dipilih")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn main_figure_carries_connector_endpoints() {
        let window = vec![
            Observation::actual(date("2025-01-10"), 16150.0),
            Observation::forecast(date("2025-01-13"), 16180.0),
        ];
        let connector = (window[0].clone(), window[1].clone());

        let fig = main_figure(&window, Some(&connector));
        let traces = fig["data"].as_array().unwrap();
        assert_eq!(traces.len(), 3);

        let segment = &traces[2];
        assert_eq!(segment["x"], json!(["2025-01-10", "2025-01-13"]));
        assert_eq!(segment["y"], json!([16150.0, 16180.0]));
        assert_eq!(segment["showlegend"], json!(false));
    }

    #[test]
    fn connectorless_figure_has_two_traces() {
        let window = vec![Observation::actual(date("2025-01-10"), 16150.0)];
        let fig = main_figure(&window, None);
        assert_eq!(fig["data"].as_array().unwrap().len(), 2);
        assert_eq!(fig["data"][0]["name"], json!("actual"));
        assert_eq!(fig["data"][1]["name"], json!("forecast"));
    }

    #[test]
    fn range_figure_splits_rows_by_kind() {
        let rows = vec![
            Observation::actual(date("2025-01-09"), 16120.0),
            Observation::actual(date("2025-01-10"), 16150.0),
            Observation::forecast(date("2025-01-13"), 16180.0),
        ];

        let fig = range_figure(&rows);
        assert_eq!(fig["data"][0]["x"], json!(["2025-01-09", "2025-01-10"]));
        assert_eq!(fig["data"][1]["x"], json!(["2025-01-13"]));
        assert_eq!(fig["layout"]["title"], json!("Rentang Waktu yang Dipilih"));
    }
}
