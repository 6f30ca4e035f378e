use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::progression::leveling::xp_for_score;
use crate::progression::models::{ExerciseType, UserState};
use crate::progression::stats::{summarize, ProgressSummary};
use crate::state::AppState;
use crate::view::Mode;

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub score: u32,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub mode: Mode,
    pub user: UserState,
    pub summary: ProgressSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResponse {
    pub mode: Mode,
    pub user: UserState,
    pub summary: ProgressSummary,
    pub xp_gained: u32,
    pub leveled_up: bool,
}

/// GET /api/v1/progress
pub async fn handle_get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let controller = state.controller.lock().await;
    let user = controller.user().clone();
    Json(ProgressResponse {
        mode: controller.mode(),
        summary: summarize(&user),
        user,
    })
}

/// POST /api/v1/exercises/complete
///
/// Applies the score, returns to the dashboard and saves. A failed save is logged
/// but does not undo the in-memory update; the next successful save persists it.
pub async fn handle_complete(
    State(state): State<AppState>,
    Json(request): Json<CompleteRequest>,
) -> Result<Json<CompleteResponse>, AppError> {
    if request.score > 100 {
        return Err(AppError::Validation(format!(
            "score must be between 0 and 100, got {}",
            request.score
        )));
    }

    let mut controller = state.controller.lock().await;
    let previous_level = controller.user().level;
    let user = controller
        .complete(request.score, request.exercise_type)?
        .clone();

    info!(
        "Completed {} exercise: score={}, level {} -> {}, xp={}",
        request.exercise_type, request.score, previous_level, user.level, user.xp
    );

    // Saved while the lock is held so writes land in completion order.
    if let Err(e) = state.store.save(&user).await {
        error!("Failed to persist progress: {e:?}");
    }

    Ok(Json(CompleteResponse {
        mode: controller.mode(),
        summary: summarize(&user),
        xp_gained: xp_for_score(request.score),
        leveled_up: user.level > previous_level,
        user,
    }))
}
