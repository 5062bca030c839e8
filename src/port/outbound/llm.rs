//! LLM completion port used by the query generator.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap specific providers (Gemini, OpenAI, Anthropic) and
/// handle authentication and response parsing. They are called once per
/// question and never retry.
///
/// # Errors
///
/// [`complete`](Self::complete) returns a generation error for transport
/// failures, non-success statuses, malformed bodies or empty responses.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
