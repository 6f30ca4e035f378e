use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 50;
/// Flat XP threshold per level.
pub const XP_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Reading,
    Writing,
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseType::Reading => f.write_str("reading"),
            ExerciseType::Writing => f.write_str("writing"),
        }
    }
}

/// One completed exercise. `level` is the level the user held when completing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseResult {
    pub id: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub score: u32,
    pub date: DateTime<Utc>,
    pub level: u32,
}

/// The persisted progression blob. Field names are camelCase so the stored JSON
/// matches what the web front end already writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub history: Vec<ExerciseResult>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next_level: XP_PER_LEVEL,
            history: Vec::new(),
        }
    }
}
