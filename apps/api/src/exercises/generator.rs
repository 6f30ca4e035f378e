//! Exercise generation — pluggable, trait-based access to the external model.
//!
//! Default: `GeminiExerciseGenerator`. `AppState` holds an `Arc<dyn ExerciseGenerator>`,
//! so handlers and the progression code never see the concrete backend.
//!
//! Every failure (transport, API status, empty or malformed payload) becomes
//! `AppError::Llm`, is logged with operation, level and topic, and is returned as-is.
//! There is no retry and no fallback content.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::errors::AppError;
use crate::exercises::models::{ReadingExercise, WritingFeedback, WritingScenario};
use crate::exercises::requests::{
    build_evaluation_request, build_reading_request, build_scenario_request, GenerationRequest,
};
use crate::exercises::topics::random_topic;
use crate::llm_client::LlmClient;

/// The three capabilities the application needs from the model.
#[async_trait]
pub trait ExerciseGenerator: Send + Sync {
    async fn generate_reading_exercise(&self, level: u32) -> Result<ReadingExercise, AppError>;

    async fn generate_writing_scenario(&self, level: u32) -> Result<WritingScenario, AppError>;

    async fn evaluate_writing(
        &self,
        level: u32,
        scenario: &WritingScenario,
        draft: &str,
    ) -> Result<WritingFeedback, AppError>;
}

/// Gemini-backed generator.
pub struct GeminiExerciseGenerator {
    llm: LlmClient,
    native_language: String,
}

impl GeminiExerciseGenerator {
    pub fn new(llm: LlmClient, native_language: String) -> Self {
        Self {
            llm,
            native_language,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        level: u32,
        request: GenerationRequest,
    ) -> Result<T, AppError> {
        let operation = request.operation.name();
        info!(operation, level, topic = %request.topic, "Requesting generation");

        self.llm
            .call_json::<T>(&request.prompt, request.system, &request.schema)
            .await
            .map_err(|e| {
                error!(
                    operation,
                    level,
                    topic = %request.topic,
                    "Generation request failed: {e}"
                );
                AppError::Llm(format!("{operation} failed: {e}"))
            })
    }
}

#[async_trait]
impl ExerciseGenerator for GeminiExerciseGenerator {
    async fn generate_reading_exercise(&self, level: u32) -> Result<ReadingExercise, AppError> {
        let request = build_reading_request(level, random_topic(), &self.native_language);
        self.dispatch(level, request).await
    }

    async fn generate_writing_scenario(&self, level: u32) -> Result<WritingScenario, AppError> {
        let request = build_scenario_request(level, random_topic(), &self.native_language);
        self.dispatch(level, request).await
    }

    async fn evaluate_writing(
        &self,
        level: u32,
        scenario: &WritingScenario,
        draft: &str,
    ) -> Result<WritingFeedback, AppError> {
        let request = build_evaluation_request(level, scenario, draft, &self.native_language);
        self.dispatch(level, request).await
    }
}
