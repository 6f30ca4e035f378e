//! Axum route handlers for exercise generation and writing evaluation.
//!
//! Each handler checks the mode and reads the level under the controller lock,
//! then releases it before calling the generator.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::exercises::models::{ReadingExercise, WritingFeedback, WritingScenario};
use crate::progression::models::ExerciseType;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub scenario: WritingScenario,
    pub draft: String,
}

async fn level_in_mode(state: &AppState, exercise_type: ExerciseType) -> Result<u32, AppError> {
    let controller = state.controller.lock().await;
    controller.require_mode(exercise_type)?;
    Ok(controller.user().level)
}

/// POST /api/v1/reading/exercise
pub async fn handle_reading_exercise(
    State(state): State<AppState>,
) -> Result<Json<ReadingExercise>, AppError> {
    let level = level_in_mode(&state, ExerciseType::Reading).await?;
    let exercise = state.generator.generate_reading_exercise(level).await?;
    Ok(Json(exercise))
}

/// POST /api/v1/writing/scenario
pub async fn handle_writing_scenario(
    State(state): State<AppState>,
) -> Result<Json<WritingScenario>, AppError> {
    let level = level_in_mode(&state, ExerciseType::Writing).await?;
    let scenario = state.generator.generate_writing_scenario(level).await?;
    Ok(Json(scenario))
}

/// POST /api/v1/writing/evaluate
///
/// Scores a draft against the scenario it answers. Does not record progress;
/// the client reports the score through `/api/v1/exercises/complete`.
pub async fn handle_evaluate_writing(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<WritingFeedback>, AppError> {
    if request.draft.trim().is_empty() {
        return Err(AppError::Validation("draft cannot be empty".to_string()));
    }

    let level = level_in_mode(&state, ExerciseType::Writing).await?;
    let feedback = state
        .generator
        .evaluate_writing(level, &request.scenario, &request.draft)
        .await?;
    Ok(Json(feedback))
}
