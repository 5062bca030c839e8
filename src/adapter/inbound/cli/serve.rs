//! Handler for the `serve` command.

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::adapter::inbound::web::{server, AppState};
use crate::error::Result;
use crate::infrastructure::factory::pipeline::build_pipeline;

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let config = load_config(
        &args.config,
        args.database.clone(),
        args.host.clone(),
        args.port,
    )?;

    let logging = match output::verbosity() {
        0 => config.logging.clone(),
        1 => config.logging.clone().with_level("debug"),
        _ => config.logging.clone().with_level("trace"),
    };
    logging.init();

    let pipeline = build_pipeline(&config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", format!("http://{}", config.server.bind_addr()));
    output::field("Database", config.database.display());
    output::field("Model", format!("{} ({})", config.llm.model(), config.llm.provider));
    if !config.database.exists() {
        output::warning(&format!(
            "database {} not found; queries will fail until it exists",
            config.database.display()
        ));
    }
    if config.allow_writes {
        output::warning("allow_writes is on: generated statements may modify data");
    }

    let state = AppState::new(pipeline, config.llm.model());
    server::run(&config.server, state).await
}
