//! Shared request state.

use crate::application::QueryPipeline;

/// Data every handler can reach through `web::Data`.
pub struct AppState {
    pub pipeline: QueryPipeline,
    /// Model name shown on the informational pages.
    pub model: String,
}

impl AppState {
    pub fn new(pipeline: QueryPipeline, model: impl Into<String>) -> Self {
        Self {
            pipeline,
            model: model.into(),
        }
    }
}
