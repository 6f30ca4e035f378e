// All LLM prompt templates for the exercise module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Reading exercise prompt.
/// Replace: {level_context}, {topic}, {native_language}, {json_only}
pub const READING_PROMPT_TEMPLATE: &str = r#"Generate a reading comprehension exercise for a software engineer learning English.
{level_context}

Create a realistic email or message from a colleague about a software product issue or update.
Topic: {topic}

Include 3 multiple choice comprehension questions, each with exactly 4 options.
'correctIndex' is the zero-based index of the correct option.
IMPORTANT: The 'explanation' for each question must be in {native_language}.

{json_only}"#;

/// Writing scenario prompt.
/// Replace: {level_context}, {topic}, {native_language}, {json_only}
pub const SCENARIO_PROMPT_TEMPLATE: &str = r#"Generate a writing scenario for a software engineer.
{level_context}

The user needs to write a message to an overseas colleague.
Topic: {topic}

Format constraints:
1. 'context' must be in English (simulate a received message/situation).
2. 'goal' and 'keyPoints' MUST be in {native_language} (instructions to the user).

{json_only}"#;

/// Writing evaluation prompt.
/// Replace: {level_context}, {native_language}, {json_only}, then {submission} last
/// with the block from `format_submission`.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this English writing submission from a software engineer.
{level_context}

{submission}

Output Requirements:
1. 'score': 0-100, based on clarity, tone, and grammar.
2. 'improvedVersion': Natural English rewrite.
3. 'critique': Provide constructive feedback in {native_language}. ALWAYS include example sentences to illustrate your points.
4. 'grammarMistakes': Explain errors in {native_language}.

{json_only}"#;

/// Scenario and draft block of the evaluation prompt. Client text is embedded verbatim.
pub fn format_submission(
    context: &str,
    goal: &str,
    recipient: &str,
    key_points: &str,
    draft: &str,
    native_language: &str,
) -> String {
    format!(
        "Scenario Context: {context}\n\
        Goal ({native_language}): {goal}\n\
        Recipient: {recipient}\n\
        Key points to cover: {key_points}\n\
        \n\
        User's Draft: \"{draft}\""
    )
}
