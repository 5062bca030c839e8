//! Request-scoped domain types for the text-to-SQL pipeline.
//!
//! Everything here is pure: building prompts, cleaning model output,
//! deciding whether a statement may run, and holding query results.

mod prompt;
mod question;
mod result_set;
mod sql;

pub use prompt::{Prompt, PromptTemplate, DEFAULT_INSTRUCTIONS, QUESTION_LABEL};
pub use question::Question;
pub use result_set::{ResultSet, Value};
pub use sql::{clean_response, GeneratedSql, StatementGuard};
