//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌────────────┐      ┌──────────────────┐      ┌───────────────┐
//!   │  CLI / Web │ ───▶ │  QueryPipeline   │ ───▶ │ Llm           │
//!   │  (inbound) │      │  (application)   │      │ QueryExecutor │
//!   └────────────┘      └──────────────────┘      └───────────────┘
//! ```
//!
//! - [`outbound::llm::Llm`] - text generation backends (Gemini, OpenAI, Anthropic)
//! - [`outbound::executor::QueryExecutor`] - runs generated SQL against a database

pub mod outbound;
