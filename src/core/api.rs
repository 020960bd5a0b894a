//! HTTP API for numfield
//!
//! Endpoints:
//! - POST /analyze - Score raw text
//! - POST /remedy  - Generate a remedy from digits + counts
//! - POST /unlock  - Record a payment for an input (simulated redirect)
//! - POST /report  - Analysis, plus remedy while unlocked
//! - GET /health   - Health check

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::{NumerologyEngine, RngSource, UnlockStore};
use crate::error::CoreError;
use crate::types::{AnalysisResult, CategoryCounts, NormalizationMode, RemedyResult, Report, UnlockStatus};

/// Value of the `pay` field that marks a completed payment redirect
pub const PAY_SUCCESS: &str = "success";

/// App state
pub struct AppState {
    pub engine: NumerologyEngine,
    pub unlocks: RwLock<UnlockStore>,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    pub mode: Option<NormalizationMode>,
}

/// Remedy request
#[derive(Debug, Deserialize)]
pub struct RemedyRequest {
    pub digits: String,
    pub counts: CategoryCounts,
}

/// Unlock request
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub text: String,
}

/// Unlock response
#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub unlock: UnlockStatus,
}

/// Report request
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub text: String,
    pub mode: Option<NormalizationMode>,
    /// `"success"` when arriving from the payment provider
    pub pay: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub unlocked_inputs: usize,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: CoreError) -> ApiError {
    warn!(error = %err, "request rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        }),
    )
}

/// Create the API router; fails if the unlock TTL is unrepresentable
pub fn create_router(config: EngineConfig) -> Result<Router, CoreError> {
    let state = Arc::new(AppState {
        unlocks: RwLock::new(UnlockStore::new(config.unlock_ttl_secs)?),
        engine: NumerologyEngine::new(config),
    });

    Ok(Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/remedy", post(remedy))
        .route("/unlock", post(unlock))
        .route("/report", post(report))
        .with_state(state))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut unlocks = state.unlocks.write().await;
    unlocks.purge_expired(Utc::now());
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        unlocked_inputs: unlocks.len(),
    })
}

/// Score raw text
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let mode = req.mode.unwrap_or(state.engine.config().normalization);
    Json(state.engine.analyze(req.text.as_deref(), mode))
}

/// Generate a remedy from caller-supplied digits and counts
async fn remedy(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemedyRequest>,
) -> Result<Json<RemedyResult>, ApiError> {
    let mut rng = RngSource::from_entropy();
    state
        .engine
        .generate_remedy(&req.digits, &req.counts, &mut rng)
        .map(Json)
        .map_err(api_error)
}

/// Record a payment
async fn unlock(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UnlockRequest>,
) -> Json<UnlockResponse> {
    let mut unlocks = state.unlocks.write().await;
    let status = unlocks.unlock(&req.text, Utc::now());
    Json(UnlockResponse { unlock: status })
}

/// Full report for an input, honouring the unlock window
async fn report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<Report>, ApiError> {
    let now = Utc::now();
    let status = {
        let mut unlocks = state.unlocks.write().await;
        if req.pay.as_deref() == Some(PAY_SUCCESS) {
            unlocks.unlock(&req.text, now);
        }
        unlocks.status(&req.text, now)
    };

    let mode = req.mode.unwrap_or(state.engine.config().normalization);
    let mut rng = RngSource::from_entropy();
    state
        .engine
        .report(&req.text, mode, status, &mut rng)
        .map(Json)
        .map_err(api_error)
}

/// Run the API server
pub async fn run_server(addr: &str, config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "numfield API listening");
    info!("  POST /analyze - Score raw text");
    info!("  POST /remedy  - Generate remedy");
    info!("  POST /unlock  - Record payment");
    info!("  POST /report  - Analysis + remedy while unlocked");
    info!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
