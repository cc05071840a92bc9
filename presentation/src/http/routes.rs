//! Route handlers

use super::error::ApiError;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use report_application::{ResearchReport, RunResearchInput, RunResearchUseCase};
use report_domain::{DEFAULT_NUM_RESULTS, ReportStyle};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub research: Arc<RunResearchUseCase>,
}

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub topic: String,
    #[serde(default = "default_num_results")]
    pub num_results: usize,
    #[serde(default = "default_report_style")]
    pub report_style: String,
}

fn default_num_results() -> usize {
    DEFAULT_NUM_RESULTS
}

fn default_report_style() -> String {
    ReportStyle::default().to_string()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/research", post(research))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Research report API is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn research(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchReport>, ApiError> {
    info!(
        topic = %req.topic,
        num_results = req.num_results,
        report_style = %req.report_style,
        "POST /api/research"
    );
    let style: ReportStyle = req.report_style.parse()?;
    let input = RunResearchInput::new(req.topic, req.num_results, style)?;
    let report = state
        .research
        .execute(input, Local::now().date_naive())
        .await?;
    Ok(Json(report))
}
