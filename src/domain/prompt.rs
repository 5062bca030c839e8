//! Prompt construction.
//!
//! A prompt is the instruction template followed by [`QUESTION_LABEL`] and
//! the user's question, with nothing else added.

use std::fmt;

use super::question::Question;

/// Instruction text describing the dialect, the `Students` table and the
/// expected answer format.
pub const DEFAULT_INSTRUCTIONS: &str = "
You are an expert in converting English questions into SQLite SQL queries.

The database is SQLite.
There is a table named Students with columns:
name, class, marks, company.

Rules:
- Use only SQLite syntax.
- Do NOT use MySQL commands like SHOW TABLES.
- Return ONLY the SQL query.
";

/// Separator placed between the instructions and the question.
pub const QUESTION_LABEL: &str = "\nUser Question: ";

/// Fixed instruction text that every prompt starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    instructions: String,
}

impl PromptTemplate {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Combine the instructions with a question. Never fails, even for an
    /// empty question.
    #[must_use]
    pub fn build(&self, question: &Question) -> Prompt {
        let mut text = String::with_capacity(
            self.instructions.len() + QUESTION_LABEL.len() + question.as_str().len(),
        );
        text.push_str(&self.instructions);
        text.push_str(QUESTION_LABEL);
        text.push_str(question.as_str());
        Prompt(text)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_INSTRUCTIONS)
    }
}

/// Text sent to the model for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_instructions_then_labelled_question() {
        let template = PromptTemplate::default();
        let prompt = template.build(&Question::new("List all students with marks above 80"));

        assert!(prompt.as_str().starts_with(DEFAULT_INSTRUCTIONS));
        assert!(prompt
            .as_str()
            .ends_with("\nUser Question: List all students with marks above 80"));
        assert_eq!(
            prompt.as_str().len(),
            DEFAULT_INSTRUCTIONS.len()
                + QUESTION_LABEL.len()
                + "List all students with marks above 80".len()
        );
    }

    #[test]
    fn empty_question_still_builds() {
        let prompt = PromptTemplate::default().build(&Question::new(""));
        assert_eq!(
            prompt.as_str(),
            format!("{DEFAULT_INSTRUCTIONS}{QUESTION_LABEL}")
        );
    }

    #[test]
    fn custom_instructions_replace_default() {
        let template = PromptTemplate::new("Answer in SQL.");
        let prompt = template.build(&Question::new("how many rows?"));
        assert_eq!(prompt.as_str(), "Answer in SQL.\nUser Question: how many rows?");
    }

    #[test]
    fn default_instructions_mention_schema() {
        assert!(DEFAULT_INSTRUCTIONS.contains("Students"));
        assert!(DEFAULT_INSTRUCTIONS.contains("name, class, marks, company."));
        assert!(DEFAULT_INSTRUCTIONS.starts_with('\n'));
        assert!(DEFAULT_INSTRUCTIONS.ends_with("Return ONLY the SQL query.\n"));
    }
}
