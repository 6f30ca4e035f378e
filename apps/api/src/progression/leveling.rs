//! Leveling — turns a completed exercise score into XP and level changes.
//!
//! Level-ups are single-step: one call can raise the level by at most one, and the
//! carried-over XP is not re-checked against the threshold. A large score just below
//! a threshold therefore leaves more than a full level of XP banked. At MAX_LEVEL
//! the XP bar is pinned full.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::progression::models::{ExerciseResult, ExerciseType, UserState, MAX_LEVEL};

/// XP awarded for a score: `round(score * 1.5)`, half rounding up.
pub fn xp_for_score(score: u32) -> u32 {
    (score * 3 + 1) / 2
}

/// Applies a completed exercise to `state`, returning the new state.
///
/// The score is trusted; range checks happen at the request boundary.
pub fn apply_exercise_result(
    state: &UserState,
    score: u32,
    exercise_type: ExerciseType,
) -> UserState {
    apply_exercise_result_at(state, score, exercise_type, Utc::now())
}

/// Same as [`apply_exercise_result`] with an explicit completion time.
pub fn apply_exercise_result_at(
    state: &UserState,
    score: u32,
    exercise_type: ExerciseType,
    completed_at: DateTime<Utc>,
) -> UserState {
    let threshold = state.xp_to_next_level;
    let mut xp = state.xp + xp_for_score(score);
    let mut level = state.level;

    if xp >= threshold && level < MAX_LEVEL {
        xp -= threshold;
        level += 1;
    } else if level == MAX_LEVEL {
        xp = threshold;
    }

    let mut history = state.history.clone();
    history.push(ExerciseResult {
        id: Uuid::now_v7().to_string(),
        exercise_type,
        score,
        date: completed_at,
        level: state.level,
    });

    UserState {
        level,
        xp,
        xp_to_next_level: threshold,
        history,
    }
}
