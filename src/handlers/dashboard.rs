use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Local, NaiveDate};
use tracing::{error, instrument};

use crate::charts;
use crate::pipeline::{self, merge};
use crate::schemas::{ApiResponse, AppState, DashboardView, DateSpan, RangeQuery, RangeView};

fn run_pipeline(state: &AppState) -> Result<pipeline::DashboardData, StatusCode> {
    let today = Local::now().date_naive();
    pipeline::run(&state.config.data_dir, today).map_err(|e| {
        error!("dashboard pipeline failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Get the full dashboard payload: main figure, prediction check, trend
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard data computed successfully", body = ApiResponse<DashboardView>),
        (status = 500, description = "Required data files could not be read", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardView>>, StatusCode> {
    let data = run_pipeline(&state)?;

    let figure = charts::main_figure(&data.window, data.connector.as_ref());
    let range = merge::span(&data.merged).map(|(min_date, max_date)| DateSpan {
        min_date,
        max_date,
    });

    let view = DashboardView {
        figure,
        observations: data.window,
        prediction: data.prediction,
        trend: data.trend,
        warnings: data.warnings,
        range,
    };

    Ok(Json(ApiResponse {
        data: view,
        message: "Dashboard data computed successfully".to_string(),
        success: true,
    }))
}

/// Get the range-filtered chart for the secondary view
#[utoipa::path(
    get,
    path = "/api/v1/range",
    tag = "dashboard",
    params(RangeQuery),
    responses(
        (status = 200, description = "Range view computed successfully", body = ApiResponse<RangeView>),
        (status = 500, description = "Required data files could not be read", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_range(
    Query(query): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RangeView>>, StatusCode> {
    let data = run_pipeline(&state)?;

    // Bounds are inclusive; unset bounds fall back to the full merged span.
    let start = query.start_date.unwrap_or(NaiveDate::MIN);
    let end = query.end_date.unwrap_or(NaiveDate::MAX);
    let filtered = merge::filter_range(&data.merged, start, end);

    let view = RangeView {
        figure: charts::range_figure(&filtered),
        observations: filtered,
    };

    Ok(Json(ApiResponse {
        data: view,
        message: "Range view computed successfully".to_string(),
        success: true,
    }))
}
