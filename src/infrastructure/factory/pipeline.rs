//! Query pipeline factory.

use std::sync::Arc;

use tracing::info;

use super::llm::build_llm_client;
use crate::adapter::outbound::sqlite::SqliteExecutor;
use crate::application::QueryPipeline;
use crate::domain::StatementGuard;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build the pipeline with the configured model client.
///
/// # Errors
///
/// Fails when the model client cannot be built (see [`build_llm_client`]).
#[allow(clippy::result_large_err)]
pub fn build_pipeline(config: &Config) -> Result<QueryPipeline> {
    let llm = build_llm_client(config)?;
    Ok(build_pipeline_with(config, llm))
}

/// Build the pipeline around an already constructed model client.
#[must_use]
pub fn build_pipeline_with(config: &Config, llm: Arc<dyn Llm>) -> QueryPipeline {
    let executor =
        SqliteExecutor::new(config.database.clone()).with_writes(config.allow_writes);
    info!(
        database = %config.database.display(),
        allow_writes = config.allow_writes,
        "query pipeline ready"
    );

    QueryPipeline::new(llm, Arc::new(executor))
        .with_template(config.prompt.template())
        .with_guard(StatementGuard::new(config.allow_writes))
}
