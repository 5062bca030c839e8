//! Application services (use cases).
//!
//! [`pipeline::QueryPipeline`] is the only use case: question in, rows out.

pub mod pipeline;

pub use pipeline::{Answer, QueryFailure, QueryPipeline};
