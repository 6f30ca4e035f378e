//! Request builder — prompt text plus the structured-output contract for each operation.
//!
//! Building is pure: level, topic and language in, `GenerationRequest` out. Dispatch
//! happens in `generator`.

use crate::exercises::models::WritingScenario;
use crate::exercises::persona::level_context;
use crate::exercises::prompts::{
    format_submission, EVALUATION_PROMPT_TEMPLATE, READING_PROMPT_TEMPLATE,
    SCENARIO_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, TUTOR_SYSTEM};
use crate::llm_client::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateReadingExercise,
    GenerateWritingScenario,
    EvaluateWriting,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::GenerateReadingExercise => "generate_reading_exercise",
            Operation::GenerateWritingScenario => "generate_writing_scenario",
            Operation::EvaluateWriting => "evaluate_writing",
        }
    }
}

/// Everything needed for one structured-output call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub operation: Operation,
    /// Topic or scenario context, carried for log context.
    pub topic: String,
    pub prompt: String,
    pub system: Option<&'static str>,
    pub schema: Schema,
}

// ────────────────────────────────────────────────────────────────────────────
// Response schemas
// ────────────────────────────────────────────────────────────────────────────

pub fn reading_schema(native_language: &str) -> Schema {
    let question = Schema::object()
        .required_property("question", Schema::string())
        .required_property("options", Schema::array(Schema::string()))
        .required_property(
            "correctIndex",
            Schema::integer().describe("Zero-based index of the correct option"),
        )
        .required_property(
            "explanation",
            Schema::string().describe(&format!("Why the answer is correct (in {native_language})")),
        );

    Schema::object()
        .required_property("subject", Schema::string().describe("Email subject line"))
        .required_property(
            "sender",
            Schema::string().describe("Name and role of the sender (e.g., 'Mike, Backend Lead')"),
        )
        .required_property(
            "body",
            Schema::string().describe("The content of the technical email or slack message."),
        )
        .required_property("questions", Schema::array(question))
}

pub fn scenario_schema(native_language: &str) -> Schema {
    Schema::object()
        .required_property(
            "context",
            Schema::string().describe("The situation (e.g., 'The production DB is spiking in CPU')"),
        )
        .required_property(
            "recipientRole",
            Schema::string().describe("Who the user is writing to"),
        )
        .required_property(
            "goal",
            Schema::string().describe(&format!(
                "What the user needs to achieve (in {native_language})"
            )),
        )
        .required_property(
            "keyPoints",
            Schema::array(Schema::string())
                .describe(&format!("Facts that must be included (in {native_language})")),
        )
}

pub fn feedback_schema(native_language: &str) -> Schema {
    Schema::object()
        .required_property(
            "score",
            Schema::integer().describe("Score from 0 to 100 based on clarity, tone, and grammar."),
        )
        .required_property(
            "critique",
            Schema::string().describe(&format!(
                "Constructive feedback on the user's writing in {native_language}."
            )),
        )
        .required_property(
            "improvedVersion",
            Schema::string().describe("A native-level rewrite of the user's message in English."),
        )
        .required_property(
            "grammarMistakes",
            Schema::array(Schema::string()).describe(&format!(
                "List of specific grammar or vocabulary errors explained in {native_language}."
            )),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

pub fn build_reading_request(level: u32, topic: &str, native_language: &str) -> GenerationRequest {
    let prompt = READING_PROMPT_TEMPLATE
        .replace("{level_context}", level_context(level))
        .replace("{topic}", topic)
        .replace("{native_language}", native_language)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    GenerationRequest {
        operation: Operation::GenerateReadingExercise,
        topic: topic.to_string(),
        prompt,
        system: Some(TUTOR_SYSTEM),
        schema: reading_schema(native_language),
    }
}

pub fn build_scenario_request(level: u32, topic: &str, native_language: &str) -> GenerationRequest {
    let prompt = SCENARIO_PROMPT_TEMPLATE
        .replace("{level_context}", level_context(level))
        .replace("{topic}", topic)
        .replace("{native_language}", native_language)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    GenerationRequest {
        operation: Operation::GenerateWritingScenario,
        topic: topic.to_string(),
        prompt,
        system: None,
        schema: scenario_schema(native_language),
    }
}

pub fn build_evaluation_request(
    level: u32,
    scenario: &WritingScenario,
    draft: &str,
    native_language: &str,
) -> GenerationRequest {
    let submission = format_submission(
        &scenario.context,
        &scenario.goal,
        &scenario.recipient_role,
        &scenario.key_points.join("; "),
        draft,
        native_language,
    );

    // Fixed fragments first; the client-supplied block goes in last and is never rescanned.
    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{level_context}", level_context(level))
        .replace("{native_language}", native_language)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{submission}", &submission);

    GenerationRequest {
        operation: Operation::EvaluateWriting,
        topic: scenario.context.clone(),
        prompt,
        system: None,
        schema: feedback_schema(native_language),
    }
}
