//! Tests for factory functions.
//!
//! The API key is set on the config directly so no test touches the
//! process environment.

use crate::error::{ConfigError, Error};
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{llm, pipeline};

fn config_for(provider: LlmProvider, api_key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.llm.provider = provider;
    config.llm.api_key = api_key.map(str::to_string);
    config
}

mod llm_factory {
    use super::*;

    #[test]
    fn missing_key_names_the_provider_variable() {
        let config = config_for(LlmProvider::OpenAi, None);

        match llm::build_llm_client(&config) {
            Err(Error::Config(ConfigError::MissingField { field })) => {
                assert_eq!(field, "OPENAI_API_KEY");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("client built without a key"),
        }
    }

    #[test]
    fn builds_each_provider() {
        for (provider, name) in [
            (LlmProvider::Gemini, "gemini"),
            (LlmProvider::OpenAi, "openai"),
            (LlmProvider::Anthropic, "anthropic"),
        ] {
            let config = config_for(provider, Some("test-key"));
            let client = llm::build_llm_client(&config).unwrap();
            assert_eq!(client.name(), name);
        }
    }

    #[test]
    fn honours_base_url_override() {
        let mut config = config_for(LlmProvider::Gemini, Some("test-key"));
        config.llm.gemini.base_url = Some("http://127.0.0.1:9".into());
        assert!(llm::build_llm_client(&config).is_ok());
    }
}

mod pipeline_factory {
    use super::*;
    use crate::domain::Question;

    #[test]
    fn pipeline_uses_configured_provider_and_prompt() {
        let mut config = config_for(LlmProvider::Anthropic, Some("test-key"));
        config.prompt.instructions = Some("Answer in SQLite.".into());

        let pipeline = pipeline::build_pipeline(&config).unwrap();
        assert_eq!(pipeline.provider(), "anthropic");
        assert_eq!(
            pipeline.prompt(&Question::new("how many?")).as_str(),
            "Answer in SQLite.\nUser Question: how many?"
        );
    }

    #[test]
    fn pipeline_requires_api_key() {
        let config = config_for(LlmProvider::Gemini, None);
        assert!(pipeline::build_pipeline(&config).is_err());
    }
}
