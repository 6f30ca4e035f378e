use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::view::Mode;

#[derive(Debug, Serialize)]
pub struct ModeResponse {
    pub mode: Mode,
}

/// GET /api/v1/mode
pub async fn handle_get_mode(State(state): State<AppState>) -> Json<ModeResponse> {
    let mode = state.controller.lock().await.mode();
    Json(ModeResponse { mode })
}

/// POST /api/v1/mode/reading
pub async fn handle_start_reading(
    State(state): State<AppState>,
) -> Result<Json<ModeResponse>, AppError> {
    let mode = state.controller.lock().await.start_reading()?;
    info!("Switched to reading mode");
    Ok(Json(ModeResponse { mode }))
}

/// POST /api/v1/mode/writing
pub async fn handle_start_writing(
    State(state): State<AppState>,
) -> Result<Json<ModeResponse>, AppError> {
    let mode = state.controller.lock().await.start_writing()?;
    info!("Switched to writing mode");
    Ok(Json(ModeResponse { mode }))
}

/// POST /api/v1/mode/exit
pub async fn handle_exit(State(state): State<AppState>) -> Json<ModeResponse> {
    let mode = state.controller.lock().await.exit();
    Json(ModeResponse { mode })
}
