//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`llm`] - LLM client construction
//! - [`pipeline`] - Query pipeline wiring

pub mod llm;
pub mod pipeline;

#[cfg(test)]
mod tests;
