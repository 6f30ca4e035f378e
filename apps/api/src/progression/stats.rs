//! Dashboard summary derived from `UserState`. Pure and recomputed on demand.

use serde::Serialize;

use crate::exercises::persona::DifficultyBand;
use crate::progression::models::{ExerciseType, UserState, MAX_LEVEL};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStats {
    pub completed: usize,
    pub average_score: Option<f64>,
    pub best_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub level: u32,
    pub band: DifficultyBand,
    /// Fill of the XP bar, 0 – 100.
    pub progress_percent: u32,
    pub max_level_reached: bool,
    pub total_exercises: usize,
    pub reading: TypeStats,
    pub writing: TypeStats,
}

pub fn summarize(state: &UserState) -> ProgressSummary {
    let progress_percent = if state.xp_to_next_level == 0 {
        100
    } else {
        (state.xp.saturating_mul(100) / state.xp_to_next_level).min(100)
    };

    ProgressSummary {
        level: state.level,
        band: DifficultyBand::for_level(state.level),
        progress_percent,
        max_level_reached: state.level >= MAX_LEVEL,
        total_exercises: state.history.len(),
        reading: type_stats(state, ExerciseType::Reading),
        writing: type_stats(state, ExerciseType::Writing),
    }
}

fn type_stats(state: &UserState, exercise_type: ExerciseType) -> TypeStats {
    let scores: Vec<u32> = state
        .history
        .iter()
        .filter(|r| r.exercise_type == exercise_type)
        .map(|r| r.score)
        .collect();

    let average_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64)
    };

    TypeStats {
        completed: scores.len(),
        average_score,
        best_score: scores.iter().copied().max(),
    }
}
