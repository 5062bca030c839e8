//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod executor;
pub mod llm;
