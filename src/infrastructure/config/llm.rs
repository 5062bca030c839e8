//! LLM provider configuration.
//!
//! Provides configuration for the model that turns questions into SQL.

use std::fmt;

use serde::Deserialize;

/// Generic key variable read when the provider-specific one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// LLM provider configuration.
///
/// The API key is never read from the TOML file; it is taken from the
/// environment once when the configuration is loaded and stored in
/// [`api_key`](Self::api_key).
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use. Defaults to Gemini.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Upper bound on a single model request, in seconds. Defaults to 60.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Gemini-specific settings.
    #[serde(default)]
    pub gemini: ProviderConfig,

    /// OpenAI-specific settings.
    #[serde(default)]
    pub openai: ProviderConfig,

    /// Anthropic-specific settings.
    #[serde(default)]
    pub anthropic: ProviderConfig,

    /// Key for the active provider, loaded from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            request_timeout_secs: default_request_timeout_secs(),
            gemini: ProviderConfig::default(),
            openai: ProviderConfig::default(),
            anthropic: ProviderConfig::default(),
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Settings for the active provider.
    #[must_use]
    pub fn active(&self) -> &ProviderConfig {
        match self.provider {
            LlmProvider::Gemini => &self.gemini,
            LlmProvider::OpenAi => &self.openai,
            LlmProvider::Anthropic => &self.anthropic,
        }
    }

    /// Model for the active provider, falling back to its default.
    #[must_use]
    pub fn model(&self) -> &str {
        self.active()
            .model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Fill [`api_key`](Self::api_key) using `lookup` (normally
    /// `std::env::var`): the provider variable first, then
    /// [`FALLBACK_API_KEY_ENV`]. Blank values count as unset.
    pub fn load_api_key<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let usable = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        self.api_key = usable(self.provider.api_key_env()).or_else(|| usable(FALLBACK_API_KEY_ENV));
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Google Gemini models.
    #[default]
    Gemini,
    /// OpenAI GPT models.
    OpenAi,
    /// Anthropic Claude models.
    Anthropic,
}

impl LlmProvider {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    /// Environment variable holding this provider's key.
    #[must_use]
    pub const fn api_key_env(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.5-flash",
            Self::OpenAi => "gpt-4o-mini",
            Self::Anthropic => "claude-3-5-haiku-latest",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier. Defaults to the provider's default model.
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature. Defaults to 0.0 so the same question tends to
    /// produce the same SQL.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1024.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Alternative API host (proxy or compatible server).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

const fn default_request_timeout_secs() -> u64 {
    60
}

const fn default_temperature() -> f64 {
    0.0
}

const fn default_max_tokens() -> usize {
    1024
}
