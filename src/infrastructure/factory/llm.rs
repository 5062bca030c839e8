//! LLM client factory.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::gemini::Gemini;
use crate::adapter::outbound::llm::http_client;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build the LLM client for the configured provider.
///
/// # Errors
///
/// Returns a config error when no API key was found in the environment, or
/// a generation error if the HTTP client cannot be built.
#[allow(clippy::result_large_err)]
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let llm = &config.llm;
    let Some(api_key) = llm.api_key.clone() else {
        return Err(ConfigError::MissingField {
            field: llm.provider.api_key_env(),
        }
        .into());
    };

    let settings = llm.active();
    let model = llm.model();
    let timeout = Duration::from_secs(llm.request_timeout_secs);
    let http = http_client(llm.provider.name(), timeout)?;

    let client: Arc<dyn Llm> = match llm.provider {
        LlmProvider::Gemini => {
            let mut client = Gemini::new(api_key, model, settings.max_tokens, settings.temperature)
                .with_http_client(http);
            if let Some(base_url) = &settings.base_url {
                client = client.with_base_url(base_url);
            }
            Arc::new(client)
        }
        LlmProvider::OpenAi => {
            let mut client = OpenAi::new(api_key, model, settings.max_tokens, settings.temperature)
                .with_http_client(http);
            if let Some(base_url) = &settings.base_url {
                client = client.with_base_url(base_url);
            }
            Arc::new(client)
        }
        LlmProvider::Anthropic => {
            let mut client =
                Anthropic::new(api_key, model, settings.max_tokens, settings.temperature)
                    .with_http_client(http);
            if let Some(base_url) = &settings.base_url {
                client = client.with_base_url(base_url);
            }
            Arc::new(client)
        }
    };

    info!(provider = client.name(), model, "LLM client initialized");
    Ok(client)
}
