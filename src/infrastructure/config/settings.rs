//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the model API key comes from the
//! environment (never from the file).
//!
//! # Example
//!
//! ```no_run
//! use intellisql::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::domain::PromptTemplate;
use crate::error::{ConfigError, Result};

/// Prompt customisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Replaces the built-in instruction text when set.
    #[serde(default)]
    pub instructions: Option<String>,
}

impl PromptConfig {
    #[must_use]
    pub fn template(&self) -> PromptTemplate {
        self.instructions
            .as_ref()
            .map_or_else(PromptTemplate::default, PromptTemplate::new)
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file queried by the pipeline.
    ///
    /// The file must already exist. Defaults to "data.db".
    #[serde(default = "default_database_path")]
    pub database: PathBuf,

    /// Let generated statements modify the database.
    ///
    /// Defaults to false: only single read-only statements run.
    #[serde(default)]
    pub allow_writes: bool,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM provider configuration.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Prompt customisation.
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            allow_writes: false,
            logging: LoggingConfig::default(),
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            prompt: PromptConfig::default(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data.db")
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.finish()
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::default().finish()
        }
    }

    fn finish(mut self) -> Result<Self> {
        self.llm.load_api_key(|name| std::env::var(name).ok());
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    ///
    /// Called on load; call again after changing fields by hand.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or missing field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            }
            .into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.llm.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let provider = self.llm.active();
        if !(0.0..=2.0).contains(&provider.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be between 0 and 2".to_string(),
            }
            .into());
        }
        if provider.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if provider.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "model",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if let Some(base_url) = &provider.base_url {
            let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    field: "base_url",
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                }
                .into());
            }
        }
        if self
            .prompt
            .instructions
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "prompt.instructions",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::llm::LlmProvider;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.database, PathBuf::from("data.db"));
        assert!(!config.allow_writes);
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.llm.provider, LlmProvider::Gemini);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parses_full_file() {
        let toml = r#"
database = "/var/lib/intellisql/school.db"
allow_writes = true

[logging]
level = "debug"
format = "json"

[server]
host = "0.0.0.0"
port = 9000
workers = 4

[llm]
provider = "anthropic"
request_timeout_secs = 15

[llm.anthropic]
model = "claude-3-5-sonnet-latest"
temperature = 0.3
max_tokens = 256

[prompt]
instructions = "Write one SQLite query."
"#;
        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.database, PathBuf::from("/var/lib/intellisql/school.db"));
        assert!(config.allow_writes);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.llm.provider, LlmProvider::Anthropic);
        assert_eq!(config.llm.model(), "claude-3-5-sonnet-latest");
        assert_eq!(config.llm.active().max_tokens, 256);
        assert_eq!(
            config.prompt.template().instructions(),
            "Write one SQLite query."
        );
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let toml = "[llm.gemini]\ntemperature = 3.5\n";
        match Config::parse_toml(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "temperature",
                ..
            })) => {}
            other => panic!("expected temperature error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_base_url() {
        let toml = "[llm.gemini]\nbase_url = \"ftp://example.com\"\n";
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                ..
            }))
        ));

        let toml = "[llm.gemini]\nbase_url = \"not a url\"\n";
        assert!(Config::parse_toml(toml).is_err());
    }

    #[test]
    fn only_active_provider_is_validated() {
        let toml = "[llm]\nprovider = \"gemini\"\n[llm.openai]\nmax_tokens = 0\n";
        assert!(Config::parse_toml(toml).is_ok());
    }

    #[test]
    fn rejects_blank_instructions() {
        let toml = "[prompt]\ninstructions = \"   \"\n";
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "prompt.instructions",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_provider_is_parse_error() {
        let toml = "[llm]\nprovider = \"palm\"\n";
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/definitely/not/here/config.toml").unwrap();
        assert_eq!(config.database, PathBuf::from("data.db"));

        assert!(matches!(
            Config::load("/definitely/not/here/config.toml"),
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}
