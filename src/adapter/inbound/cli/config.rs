//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set GEMINI_API_KEY (or API_KEY) in the environment or a .env file");
    output::note(&format!("3. Run: intellisql config validate -c {}", path.display()));
    output::note(&format!("4. Run: intellisql serve -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "(defaults)".to_string()
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config show",
            "source": source,
            "database": config.database.display().to_string(),
            "allow_writes": config.allow_writes,
            "server": {
                "bind": config.server.bind_addr(),
                "workers": config.server.worker_count(),
            },
            "llm": {
                "provider": config.llm.provider.name(),
                "model": config.llm.model(),
                "temperature": config.llm.active().temperature,
                "max_tokens": config.llm.active().max_tokens,
                "request_timeout_secs": config.llm.request_timeout_secs,
                "api_key_loaded": config.llm.api_key.is_some(),
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source);
    output::field("Database", config.database.display());
    output::field("Writes", if config.allow_writes { "allowed" } else { "read-only" });

    output::section("Server");
    output::field("Bind", config.server.bind_addr());
    output::field("Workers", config.server.worker_count());

    output::section("Model");
    let provider = config.llm.active();
    output::field("Provider", config.llm.provider);
    output::field("Model", config.llm.model());
    output::field("Temperature", provider.temperature);
    output::field("Max tokens", provider.max_tokens);
    output::field("Timeout", format!("{}s", config.llm.request_timeout_secs));
    if let Some(base_url) = &provider.base_url {
        output::field("Base URL", base_url);
    }
    if config.llm.api_key.is_some() {
        output::success("API key loaded from the environment");
    } else {
        output::warning(&format!(
            "API key not set ({} or API_KEY)",
            config.llm.provider.api_key_env()
        ));
    }

    output::section("Prompt");
    output::field(
        "Instructions",
        if config.prompt.instructions.is_some() {
            "custom"
        } else {
            "built-in"
        },
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    let warnings = collect_warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("intellisql config show -c {}", path.display()));
    Ok(())
}

/// Problems that do not make the file invalid but will bite at runtime.
fn collect_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.llm.api_key.is_none() {
        warnings.push(format!(
            "{} is not set; the server will refuse to start",
            config.llm.provider.api_key_env()
        ));
    }
    if !config.database.exists() {
        warnings.push(format!(
            "database {} does not exist yet",
            config.database.display()
        ));
    }
    if config.allow_writes {
        warnings.push("allow_writes is on: generated statements may modify data".to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn template_is_valid_config() {
        assert!(!CONFIG_TEMPLATE.is_empty());
        let config = Config::parse_toml(CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn init_creates_file_with_template() {
        let dir = temp_dir();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = temp_dir();
        let path = dir.path().join("config.toml");
        fs::write(&path, "existing content").unwrap();

        let error = execute_init(&path, false).unwrap_err();
        assert!(error.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing content");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn validate_reports_bad_file() {
        let dir = temp_dir();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 0\n").unwrap();

        assert!(execute_validate(&path).is_err());
    }

    #[test]
    fn show_works_without_a_file() {
        let dir = temp_dir();
        assert!(execute_show(&dir.path().join("missing.toml")).is_ok());
    }

    #[test]
    fn warnings_flag_writes_and_missing_database() {
        let mut config = Config::default();
        config.database = "/no/such/dir/school.db".into();
        config.allow_writes = true;
        config.llm.api_key = Some("k".into());

        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("does not exist")));
        assert!(warnings.iter().any(|w| w.contains("allow_writes")));
    }
}
