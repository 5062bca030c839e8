//! IntelliSQL - ask a SQLite database questions in plain English.
//!
//! A question is wrapped in a fixed instruction prompt, sent to an LLM, the
//! reply is stripped of Markdown code fences, checked, and run against a
//! local SQLite file. The rows come back as a table.
//!
//! # Architecture
//!
//! - [`domain`] - prompts, generated SQL and its guard, result sets
//! - [`port`] - traits the application depends on ([`port::outbound::llm::Llm`],
//!   [`port::outbound::executor::QueryExecutor`])
//! - [`application`] - the [`QueryPipeline`](application::QueryPipeline)
//! - [`adapter`] - Gemini, OpenAI and Anthropic clients, the SQLite executor,
//!   the CLI and the web app
//! - [`infrastructure`] - configuration and wiring
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use intellisql::domain::Question;
//! use intellisql::infrastructure::config::settings::Config;
//! use intellisql::infrastructure::factory::pipeline::build_pipeline;
//!
//! # async fn run() -> intellisql::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let pipeline = build_pipeline(&config)?;
//! let answer = pipeline
//!     .run(&Question::new("List all students with marks above 80"))
//!     .await
//!     .map_err(|failure| failure.error)?;
//! println!("{}", answer.sql);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
