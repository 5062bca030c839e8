//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! for Google Gemini, OpenAI and Anthropic Claude.

pub mod anthropic;
pub mod client;
pub mod gemini;
pub mod openai;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{GenerationError, Result};

/// Longest error body kept from a failed API response.
const MAX_ERROR_BODY: usize = 512;

/// Build the HTTP client shared by a provider adapter.
///
/// # Errors
///
/// Returns a generation error if the TLS backend cannot be initialised.
pub fn http_client(provider: &'static str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| GenerationError::Transport { provider, source }.into())
}

/// Send a JSON request and decode a JSON response, mapping every failure to
/// a [`GenerationError`].
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|source| GenerationError::Transport { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GenerationError::Status {
            provider,
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY),
        }
        .into());
    }

    response
        .json::<T>()
        .await
        .map_err(|source| GenerationError::Transport { provider, source }.into())
}

/// Reject blank completions.
pub(crate) fn non_empty(provider: &'static str, text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(GenerationError::EmptyResponse { provider }.into())
    } else {
        Ok(text)
    }
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
