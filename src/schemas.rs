use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::config::AppConfig;
use crate::pipeline::metrics::{PredictionCheck, TrendLabel, TrendSummary};
use crate::pipeline::observation::{Observation, SeriesKind};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Resolved configuration (data directory, bind address)
    pub config: AppConfig,
}

/// Query parameters for the range-filtered chart
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RangeQuery {
    /// Inclusive start date (YYYY-MM-DD); defaults to the first merged date
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date (YYYY-MM-DD); defaults to the last merged date
    pub end_date: Option<NaiveDate>,
}

/// Full span of the merged table, bounds for the range controls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DateSpan {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// Everything the dashboard page needs for its initial render
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardView {
    /// Plotly figure for the main chart (traces and layout)
    #[schema(value_type = Object)]
    pub figure: serde_json::Value,
    /// Rows behind the main chart: last 30 days of actuals plus forecast
    pub observations: Vec<Observation>,
    /// Yesterday's H+1 prediction against the realized value, when available
    pub prediction: Option<PredictionCheck>,
    /// 7-day trailing/leading mean comparison, when both sides have data
    pub trend: Option<TrendSummary>,
    /// Non-fatal problems encountered while building the view
    pub warnings: Vec<String>,
    /// Bounds for the date-range controls
    pub range: Option<DateSpan>,
}

/// Range-filtered chart payload for the secondary chart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RangeView {
    /// Plotly figure for the filtered chart
    #[schema(value_type = Object)]
    pub figure: serde_json::Value,
    /// Rows inside the inclusive range
    pub observations: Vec<Observation>,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the actual-data file is present in the data directory
    pub data: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::dashboard::get_range,
    ),
    components(
        schemas(
            ApiResponse<DashboardView>,
            ApiResponse<RangeView>,
            DashboardView,
            RangeView,
            DateSpan,
            RangeQuery,
            Observation,
            SeriesKind,
            PredictionCheck,
            TrendSummary,
            TrendLabel,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "USD/IDR dashboard data endpoints"),
    ),
    info(
        title = "Prediksi USD/IDR API",
        description = "Dashboard backend serving actual and forecast USD/IDR exchange rates from CSV sources",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
