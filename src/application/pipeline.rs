//! The question → prompt → model → cleanup → guard → execute pipeline.
//!
//! Each call to [`QueryPipeline::run`] is independent: nothing is cached or
//! carried between requests, and the database connection lives only for the
//! duration of the statement.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::{GeneratedSql, Prompt, PromptTemplate, Question, ResultSet, StatementGuard};
use crate::error::{Error, ErrorKind, ExecutionError, Result};
use crate::port::outbound::executor::QueryExecutor;
use crate::port::outbound::llm::Llm;

/// Successful end-to-end result.
#[derive(Debug, Clone)]
pub struct Answer {
    pub sql: GeneratedSql,
    pub result: ResultSet,
    pub elapsed: Duration,
}

/// A failed run, with the generated SQL when generation got that far.
#[derive(Debug)]
pub struct QueryFailure {
    pub sql: Option<GeneratedSql>,
    pub error: Error,
    pub elapsed: Duration,
}

impl QueryFailure {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.kind(), self.error)
    }
}

impl std::error::Error for QueryFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Turns English questions into rows.
pub struct QueryPipeline {
    template: PromptTemplate,
    llm: Arc<dyn Llm>,
    executor: Arc<dyn QueryExecutor>,
    guard: StatementGuard,
}

impl QueryPipeline {
    pub fn new(llm: Arc<dyn Llm>, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            template: PromptTemplate::default(),
            llm,
            executor,
            guard: StatementGuard::read_only(),
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_guard(mut self, guard: StatementGuard) -> Self {
        self.guard = guard;
        self
    }

    #[must_use]
    pub fn provider(&self) -> &'static str {
        self.llm.name()
    }

    /// Build the prompt for a question.
    #[must_use]
    pub fn prompt(&self, question: &Question) -> Prompt {
        self.template.build(question)
    }

    /// Ask the model and clean its answer. No retries.
    ///
    /// # Errors
    ///
    /// Propagates the provider's generation error unchanged.
    pub async fn generate(&self, prompt: &Prompt) -> Result<GeneratedSql> {
        let raw = self.llm.complete(prompt.as_str()).await?;
        let sql = GeneratedSql::from_response(&raw);
        debug!(provider = self.llm.name(), sql = %sql, "model response cleaned");
        Ok(sql)
    }

    /// Guard, then run the statement on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the guard rejects the statement, or an
    /// execution error from the executor.
    pub async fn execute(&self, sql: &GeneratedSql) -> Result<ResultSet> {
        self.guard.check(sql)?;

        let executor = Arc::clone(&self.executor);
        let sql = sql.clone();
        tokio::task::spawn_blocking(move || executor.execute(&sql))
            .await
            .map_err(|e| ExecutionError::Task(e.to_string()))?
    }

    /// Run the whole pipeline for one question.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryFailure`] tagged with the failing stage. When the
    /// model produced SQL before the failure it is included.
    pub async fn run(&self, question: &Question) -> std::result::Result<Answer, QueryFailure> {
        let request_id = Uuid::new_v4();
        let span = info_span!("query", %request_id, provider = self.llm.name());
        self.run_inner(question).instrument(span).await
    }

    async fn run_inner(&self, question: &Question) -> std::result::Result<Answer, QueryFailure> {
        let started = Instant::now();
        info!(question = %question, "question received");

        let prompt = self.prompt(question);
        let sql = match self.generate(&prompt).await {
            Ok(sql) => sql,
            Err(error) => return Err(self.fail(None, error, started)),
        };

        match self.execute(&sql).await {
            Ok(result) => {
                let elapsed = started.elapsed();
                info!(
                    rows = result.row_count(),
                    took_ms = elapsed.as_millis() as u64,
                    "query answered"
                );
                Ok(Answer {
                    sql,
                    result,
                    elapsed,
                })
            }
            Err(error) => Err(self.fail(Some(sql), error, started)),
        }
    }

    fn fail(&self, sql: Option<GeneratedSql>, error: Error, started: Instant) -> QueryFailure {
        let kind = error.kind();
        warn!(%kind, error = %error, "query failed");
        QueryFailure {
            sql,
            error,
            elapsed: started.elapsed(),
        }
    }
}
