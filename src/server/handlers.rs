use super::types::{ErrorResponse, PromptRequest};
use crate::upstream::{GenerateBackend, GenerateRequest};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn GenerateBackend>,
    pub default_model: String,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let model = request
        .model
        .unwrap_or_else(|| state.default_model.clone());

    info!("Received generate request for model: {}", model);

    let outbound = GenerateRequest::new(model, request.prompt);

    // The upstream payload is relayed as-is; no schema is enforced on it.
    match state.backend.generate(outbound).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!("Upstream generate call failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Upstream error: {}", e),
                }),
            ))
        }
    }
}
