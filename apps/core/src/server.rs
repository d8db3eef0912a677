//! HTTP surface: `POST /analyze` and `GET /health`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::brain::{AnalysisResult, MoodAnalyzer};
use crate::error::AppError;
use crate::log_store::AnalysisLog;
use crate::models::{AnalysisRecord, HealthStatus, MoodRequest};

// --- State Management ---
pub struct AppState {
    pub analyzer: MoodAnalyzer,
    pub log: Arc<dyn AnalysisLog>,
    pub default_user_id: String,
}

impl AppState {
    pub fn new(log: Arc<dyn AnalysisLog>, default_user_id: impl Into<String>) -> Self {
        Self {
            analyzer: MoodAnalyzer::new(),
            log,
            default_user_id: default_user_id.into(),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Build the application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn analyze_handler(
    State(state): State<SharedState>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id);

    async move {
        let input = request.to_input();
        let result = state.analyzer.analyze(&input);

        let user_id = request.user_id_or(&state.default_user_id);
        let record = AnalysisRecord::new(Local::now(), user_id, &input, &result);
        state.log.append(record).await?;

        info!("Analysis complete: {}", result.summary());
        Ok::<_, AppError>(Json(result))
    }
    .instrument(span)
    .await
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
