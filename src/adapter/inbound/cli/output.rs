//! Terminal output formatting.
//!
//! Every handler prints through this module so that `--json`, `--quiet`,
//! `--verbose` and `--color` behave the same everywhere. In JSON mode each
//! call emits one `{"type": ..., "payload": ...}` line.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::json;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::command::ColorChoice;
use crate::domain::ResultSet;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Styling helpers. They honour `--color` and terminal detection.
fn paint(stream: Stream, text: &str, style: fn(&str) -> String) -> String {
    text.if_supports_color(stream, |t| style(t)).to_string()
}

fn bold(text: &str) -> String {
    paint(Stream::Stdout, text, |t| t.bold().to_string())
}

fn dimmed(text: &str) -> String {
    paint(Stream::Stdout, text, |t| t.dimmed().to_string())
}

fn green(text: &str) -> String {
    paint(Stream::Stdout, text, |t| t.green().to_string())
}

fn yellow(text: &str) -> String {
    paint(Stream::Stdout, text, |t| t.yellow().to_string())
}

fn cyan(text: &str) -> String {
    paint(Stream::Stdout, text, |t| t.cyan().to_string())
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig, color: ColorChoice) {
    match color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "intellisql",
                "version": version,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{} {}", bold("intellisql"), dimmed(version));
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<14} {}", dimmed(label), value);
}

pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", green("✓"), message);
}

/// Warnings are printed even in quiet mode.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", yellow("⚠"), message);
}

/// Errors go to stderr in every mode.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "  {} {}",
        paint(Stream::Stderr, "×", |t| t.red().to_string()),
        message
    );
}

pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", bold(title));
}

pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", dimmed(message));
}

/// Print the generated SQL.
///
/// Shown in quiet mode too, since it is part of the answer.
pub fn sql(statement: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("sql", json!({ "sql": statement }));
        return;
    }

    for line in statement.lines() {
        println!("  {}", cyan(line));
    }
}

/// Print a result set as a table. An empty result prints a note instead.
pub fn result_table(result: &ResultSet) {
    let config = read_config();

    if config.json {
        emit_json_line(
            "rows",
            json!({
                "columns": result.columns,
                "rows": result.rows,
                "row_count": result.row_count(),
            }),
        );
        return;
    }

    if result.columns.is_empty() {
        if !config.quiet {
            println!("  {}", dimmed("(statement returned no rows)"));
        }
        return;
    }

    println!("{}", render_table(result));
}

/// Render a result set with `tabled`; NULLs show as `NULL`.
#[must_use]
pub fn render_table(result: &ResultSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(result.columns.iter().cloned());
    for row in &result.rows {
        builder.push_record(row.iter().map(ToString::to_string));
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
