use serde::{Deserialize, Serialize};

/// A multiple-choice comprehension question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_index: usize,
    /// Written in the learner's native language.
    pub explanation: String,
}

/// A colleague's email or chat message plus comprehension questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingExercise {
    pub subject: String,
    pub sender: String,
    pub body: String,
    pub questions: Vec<Question>,
}

/// A situation the learner must respond to in writing.
/// `context` is English; `goal` and `key_points` are in the native language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingScenario {
    pub context: String,
    pub recipient_role: String,
    pub goal: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingFeedback {
    /// 0 – 100.
    pub score: u32,
    pub critique: String,
    pub improved_version: String,
    pub grammar_mistakes: Vec<String>,
}
