//! Difficulty persona — maps a user level to the band that drives generated content.

use serde::{Deserialize, Serialize};

/// Difficulty tier derived from level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyBand {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyBand {
    /// Levels 1–20 are Beginner, 21–40 Intermediate, everything above Advanced.
    pub fn for_level(level: u32) -> Self {
        if level <= 20 {
            DifficultyBand::Beginner
        } else if level <= 40 {
            DifficultyBand::Intermediate
        } else {
            DifficultyBand::Advanced
        }
    }

    /// Persona paragraph embedded in every prompt for this band.
    pub fn persona(self) -> &'static str {
        match self {
            DifficultyBand::Beginner => {
                "Level: Beginner (Levels 1-20). The user can barely communicate. \
                Use simple vocabulary, short sentences, and very clear context. \
                Focus on basic bug reports or simple feature questions."
            }
            DifficultyBand::Intermediate => {
                "Level: Intermediate (Levels 21-40). The user is a standard engineer. \
                Use technical jargon (API, latency, PRs, CI/CD) freely. \
                Focus on code reviews, architectural discussions, and troubleshooting."
            }
            DifficultyBand::Advanced => {
                "Level: Advanced (Levels 41-50). The user is a manager or lead. \
                Use sophisticated language, idioms, and nuance. \
                Focus on negotiation, strategic roadmaps, and conflict resolution."
            }
        }
    }
}

/// Persona paragraph for a level.
pub fn level_context(level: u32) -> &'static str {
    DifficultyBand::for_level(level).persona()
}
