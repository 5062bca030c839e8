//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - driving side: the CLI and the web app
//! - [`outbound`] - driven side: model providers and SQLite

pub mod inbound;
pub mod outbound;
