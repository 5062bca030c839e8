//! Command-line interface definitions.
//!
//! Defines the CLI structure for the intellisql application using `clap`:
//! serving the web app, asking a single question from the terminal, and
//! managing the configuration file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Ask questions in plain English and get answers from a SQLite database
#[derive(Parser, Debug)]
#[command(name = "intellisql")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the intellisql CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web application
    Serve(ServeArgs),

    /// Answer one question and print the SQL and rows
    Ask(AskArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `intellisql config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file (defaults apply when it is missing).
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the listen host.
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the database file.
    #[arg(long)]
    pub database: Option<PathBuf>,
}

/// Arguments for `ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Path to the configuration file (defaults apply when it is missing).
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the database file.
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// The question, in plain English.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

impl AskArgs {
    /// Words joined back into one question.
    #[must_use]
    pub fn question_text(&self) -> String {
        self.question.join(" ")
    }
}
