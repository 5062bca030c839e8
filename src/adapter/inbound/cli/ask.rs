//! Handler for the `ask` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::AskArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::application::QueryFailure;
use crate::domain::Question;
use crate::error::{Result, ValidationError};
use crate::infrastructure::factory::pipeline::build_pipeline;

/// Execute the ask command.
///
/// Prints the generated SQL and the rows. On failure the SQL (when there
/// was some) is still printed before the error is returned.
pub async fn execute(args: &AskArgs) -> Result<()> {
    let config = load_config(&args.config, args.database.clone(), None, None)?;
    config
        .logging
        .clone()
        .with_level(log_level(output::verbosity()))
        .init();

    let question = Question::new(args.question_text());
    if question.is_blank() {
        return Err(ValidationError::EmptyQuestion.into());
    }

    let pipeline = build_pipeline(&config)?;
    match pipeline.run(&question).await {
        Ok(answer) => {
            if output::is_json() {
                output::json_output(json!({
                    "status": "success",
                    "sql": answer.sql.as_str(),
                    "columns": answer.result.columns,
                    "rows": answer.result.rows,
                    "row_count": answer.result.row_count(),
                    "took_ms": u64::try_from(answer.elapsed.as_millis()).unwrap_or(u64::MAX),
                }));
                return Ok(());
            }

            output::section("Generated SQL Query");
            output::sql(answer.sql.as_str());
            output::section("The Response is");
            output::result_table(&answer.result);
            if output::verbosity() > 0 {
                output::field("Rows", answer.result.row_count());
                output::field("Took", format!("{} ms", answer.elapsed.as_millis()));
            }
            Ok(())
        }
        Err(failure) => {
            report_sql(&failure);
            Err(failure.error)
        }
    }
}

fn report_sql(failure: &QueryFailure) {
    if let Some(sql) = &failure.sql {
        if !output::is_json() {
            output::section("Generated SQL Query");
        }
        output::sql(sql.as_str());
    }
}

/// Terminal runs stay quiet unless asked for more.
fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
