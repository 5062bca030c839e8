//! Path utilities for intellisql.
//!
//! User-level files live under `~/.intellisql/`:
//! - `~/.intellisql/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the intellisql home directory (`~/.intellisql/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".intellisql")
}

/// Returns the default config file path (`~/.intellisql/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
