//! REST API endpoints for the dashboard.
//!
//! Two read endpoints over the result store, a derived-metrics endpoint, the
//! PDF export, and the demo login placeholder.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::metrics::{
    average_duration, browser_distribution, derive_metrics, filter_results, paginate,
    BrowserFilter, ResultFilter, StatusFilter, SuiteMetrics,
};
use crate::render::{ensure_plausible, DocumentRenderer, RenderError};
use crate::report::html::{build_report_html, ReportOptions};
use crate::store::ResultStore;

// Demo placeholder credentials. This is not an authentication mechanism.
const DEMO_EMAIL: &str = "seedling@test.com";
const DEMO_PASSWORD: &str = "12345";

/// Shared state for API handlers
pub struct AppState {
    pub store: ResultStore,
    pub renderer: Arc<dyn DocumentRenderer>,
}

/// Optional query params for the results endpoint; defaults preserve the
/// plain unfiltered contract
#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub browser: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

/// Derived metrics served to the dashboard page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub suite: SuiteMetrics,
    pub browsers: HashMap<String, usize>,
    pub average_duration: u64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Build API router
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/test-suite", get(get_test_suite))
        .route("/api/test-results", get(get_test_results))
        .route("/api/metrics", get(get_metrics))
        .route("/api/report.pdf", get(export_pdf))
        .route("/api/login", post(login))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Test suite not found"})),
    )
        .into_response()
}

/// GET /api/test-suite - current suite snapshot
async fn get_test_suite(State(state): State<Arc<AppState>>) -> Response {
    match state.store.test_suite() {
        Some(suite) => Json(suite).into_response(),
        None => not_found(),
    }
}

/// GET /api/test-results - result collection, optionally filtered/windowed
async fn get_test_results(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResultsQuery>,
) -> Response {
    let status = match StatusFilter::parse(params.status.as_deref().unwrap_or("all")) {
        Ok(status) => status,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
                .into_response()
        }
    };

    let filter = ResultFilter {
        search: params.search.unwrap_or_default(),
        status,
        browser: BrowserFilter::parse(params.browser.as_deref().unwrap_or("all")),
    };

    let filtered = filter_results(&state.store.test_results(), &filter);
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(filtered.len());
    Json(paginate(&filtered, offset, limit).to_vec()).into_response()
}

/// GET /api/metrics - percentages, browser distribution, average duration
async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    let Some(suite) = state.store.test_suite() else {
        return not_found();
    };
    let results = state.store.test_results();

    Json(DashboardMetrics {
        suite: derive_metrics(&suite),
        browsers: browser_distribution(&results),
        average_duration: average_duration(&results),
    })
    .into_response()
}

/// GET /api/report.pdf - render the current snapshot through the external
/// collaborator; a complete PDF or an error, never a truncated 200
async fn export_pdf(State(state): State<Arc<AppState>>) -> Response {
    let Some(suite) = state.store.test_suite() else {
        return not_found();
    };
    let results = state.store.test_results();
    let html = build_report_html(&suite, &results, &ReportOptions::default());

    match state
        .renderer
        .render_pdf(&html)
        .await
        .and_then(ensure_plausible)
    {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"playwright-report.pdf\"",
                ),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            bytes,
        )
            .into_response(),
        Err(err @ RenderError::TruncatedOutput(_)) => {
            log::error!("PDF generation error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "PDF generation failed or is empty"})),
            )
                .into_response()
        }
        Err(err) => {
            log::error!("PDF generation error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Failed to generate PDF"})),
            )
                .into_response()
        }
    }
}

/// POST /api/login - hardcoded demo credential check
async fn login(Json(req): Json<LoginRequest>) -> Response {
    if req.email == DEMO_EMAIL && req.password == DEMO_PASSWORD {
        Json(json!({"success": true})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
            .into_response()
    }
}
