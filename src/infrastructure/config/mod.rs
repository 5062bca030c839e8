//! Configuration loading and validation.
//!
//! - [`settings`] - top-level [`Config`](settings::Config) and TOML loading
//! - [`llm`] - model provider selection and per-provider settings
//! - [`logging`] - tracing subscriber setup
//! - [`server`] - HTTP bind address and worker count

pub mod llm;
pub mod logging;
pub mod server;
pub mod settings;
