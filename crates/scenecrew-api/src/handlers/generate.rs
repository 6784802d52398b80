//! Scene generation handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use scenecrew_llm::generate_scene_breakdown;
use scenecrew_models::{GenerateRequest, GenerateResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Generate a scene breakdown for a topic.
///
/// `POST /api/crewai` with body `{"topic": "<string>"}`. Missing or empty
/// topics are rejected with 400; generation failures map to 500. Both use
/// the uniform `{status:"error", message}` envelope.
pub async fn generate_scenes(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateResponse>> {
    let Json(request) =
        payload.map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;

    let topic = request
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Topic is required"))?;

    info!(topic, "Received scene generation request");

    let breakdown = generate_scene_breakdown(&state.llm, topic).await?;

    Ok(Json(GenerateResponse::from_breakdown(breakdown)))
}
