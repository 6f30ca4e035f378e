//! View controller — the Dashboard / Reading / Writing mode switch.
//!
//! Owns the in-memory `UserState`. Completions are applied copy-on-write: the new
//! state replaces the old one only after `apply_exercise_result` returns.

pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progression::leveling::apply_exercise_result;
use crate::progression::models::{ExerciseType, UserState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dashboard,
    Reading,
    Writing,
}

impl Mode {
    /// Mode an exercise of this type is played in.
    pub fn for_exercise(exercise_type: ExerciseType) -> Self {
        match exercise_type {
            ExerciseType::Reading => Mode::Reading,
            ExerciseType::Writing => Mode::Writing,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot start {requested:?} while in {current:?}; return to the dashboard first")]
    NotOnDashboard { current: Mode, requested: Mode },

    #[error("cannot complete a {exercise_type} exercise while in {current:?}")]
    WrongMode {
        current: Mode,
        exercise_type: ExerciseType,
    },
}

#[derive(Debug, Clone)]
pub struct ViewController {
    mode: Mode,
    user: UserState,
}

impl ViewController {
    pub fn new(user: UserState) -> Self {
        Self {
            mode: Mode::Dashboard,
            user,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn start_reading(&mut self) -> Result<Mode, TransitionError> {
        self.start(Mode::Reading)
    }

    pub fn start_writing(&mut self) -> Result<Mode, TransitionError> {
        self.start(Mode::Writing)
    }

    fn start(&mut self, requested: Mode) -> Result<Mode, TransitionError> {
        if self.mode != Mode::Dashboard {
            return Err(TransitionError::NotOnDashboard {
                current: self.mode,
                requested,
            });
        }
        self.mode = requested;
        Ok(self.mode)
    }

    /// Returns to the dashboard from any mode.
    pub fn exit(&mut self) -> Mode {
        self.mode = Mode::Dashboard;
        self.mode
    }

    /// Fails unless the controller is in the mode for `exercise_type`.
    pub fn require_mode(&self, exercise_type: ExerciseType) -> Result<(), TransitionError> {
        if self.mode != Mode::for_exercise(exercise_type) {
            return Err(TransitionError::WrongMode {
                current: self.mode,
                exercise_type,
            });
        }
        Ok(())
    }

    /// Records a finished exercise and returns to the dashboard.
    pub fn complete(
        &mut self,
        score: u32,
        exercise_type: ExerciseType,
    ) -> Result<&UserState, TransitionError> {
        self.require_mode(exercise_type)?;
        self.user = apply_exercise_result(&self.user, score, exercise_type);
        self.mode = Mode::Dashboard;
        Ok(&self.user)
    }
}
