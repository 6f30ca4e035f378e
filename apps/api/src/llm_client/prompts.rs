// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System instruction for the tutor persona used when generating exercise content.
pub const TUTOR_SYSTEM: &str = "You are a senior technical English tutor designed to \
    simulate real-world software engineering communication.";

/// Appended to every request so the payload matches the declared schema exactly.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON object that matches \
    the declared response schema exactly. Do NOT include any text outside the JSON object.";
