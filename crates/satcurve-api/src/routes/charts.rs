//! Chart generation and retrieval endpoints.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use satcurve_charts::document::Metric;
use satcurve_charts::pipeline::generate_charts;
use satcurve_charts::render;
use satcurve_core::table::parse_table;

use crate::dto::{GenerateRequest, GenerateResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, StoredCharts};

/// Runs the generation pipeline and retains the produced documents.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> ApiResult<(StatusCode, Json<GenerateResponse>)> {
    let table = parse_table(&req.table)?;
    let charts = generate_charts(&table.records, &req.settings)?;

    let mut warnings: Vec<String> = table.skips.iter().map(ToString::to_string).collect();
    warnings.extend(charts.report.messages());

    let stored = StoredCharts {
        id: Uuid::new_v4(),
        charts,
    };

    let response = GenerateResponse {
        generation_id: stored.id,
        segments: table.records.len(),
        acquisition_traces: stored.charts.acquisition.traces.len(),
        cost_traces: stored.charts.cost.traces.len(),
        warnings,
    };

    tracing::info!(
        generation_id = %stored.id,
        segments = response.segments,
        "charts generated"
    );

    *state.charts.write().unwrap() = Some(stored);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Renders the retained document for a metric.
fn rendered_html(state: &AppState, metric: &str) -> ApiResult<(Metric, String)> {
    let metric = Metric::from_slug(metric)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown metric '{metric}'")))?;

    let guard = state.charts.read().unwrap();
    let stored = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("No charts generated yet".to_string()))?;

    Ok((metric, render::to_html(stored.charts.document(metric))))
}

/// Inline HTML for previewing a chart in the browser.
pub async fn preview(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> ApiResult<Response> {
    let (_, html) = rendered_html(&state, &metric)?;
    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}

/// The same HTML served as a file download.
pub async fn download(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> ApiResult<Response> {
    let (metric, html) = rendered_html(&state, &metric)?;
    let headers = [
        (
            header::CONTENT_TYPE,
            "text/html; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.html\"", metric.slug()),
        ),
    ];
    Ok((headers, html).into_response())
}
