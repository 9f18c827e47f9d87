//! Request and response payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use satcurve_core::settings::GraphSettings;

/// Body of `POST /api/v1/charts`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Tab-separated table text, header row included.
    pub table: String,
    /// Generation settings; omitted fields fall back to their defaults.
    #[serde(default)]
    pub settings: GraphSettings,
}

/// Response of `POST /api/v1/charts`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Identifier of this generation run.
    pub generation_id: Uuid,
    /// Number of plottable segments parsed from the table.
    pub segments: usize,
    /// Traces on the acquisition chart.
    pub acquisition_traces: usize,
    /// Traces on the cost chart.
    pub cost_traces: usize,
    /// Non-fatal findings: skipped rows and segment/model pairs.
    pub warnings: Vec<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up.
    pub status: String,
    /// Server version.
    pub version: String,
}
