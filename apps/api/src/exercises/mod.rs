// Exercise request building and generation.
// All LLM calls go through llm_client — no direct Gemini HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod persona;
pub mod prompts;
pub mod requests;
pub mod topics;
