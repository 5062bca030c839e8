//! Command-line front end.

pub mod ask;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod serve;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::{Cli, Commands, ConfigCommand};

/// Load the config file (defaults when it is missing) and apply command-line
/// overrides.
#[allow(clippy::result_large_err)]
pub fn load_config(
    path: &Path,
    database: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(database) = database {
        config.database = database;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

/// Run the parsed command.
pub async fn dispatch(cli: Cli) -> Result<()> {
    output::configure(
        output::OutputConfig::new(cli.json, cli.quiet, cli.verbose),
        cli.color,
    );

    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Ask(args) => ask::execute(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
