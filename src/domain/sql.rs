//! Model output cleanup and the pre-execution statement guard.

use std::fmt;

use crate::error::ValidationError;

const SQL_FENCE: &str = "```sql";
const FENCE: &str = "```";

/// Keywords a read-only statement may start with.
const READ_ONLY_KEYWORDS: &[&str] = &["SELECT", "WITH", "VALUES"];

/// Strip markdown code-fence markers and surrounding whitespace from a raw
/// model response.
///
/// Every "```sql" marker is removed first, then every remaining "```".
/// Applying the function to its own output returns the same string.
#[must_use]
pub fn clean_response(raw: &str) -> String {
    raw.trim()
        .replace(SQL_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// SQL text produced by the model after cleanup.
///
/// Untyped and unvalidated: it may be prose, malformed SQL, or a
/// data-modifying statement. Run it through [`StatementGuard`] before
/// handing it to an executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSql(String);

impl GeneratedSql {
    /// Wrap text that is already clean, e.g. typed by an operator.
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    /// Build from a raw model response, removing fences and whitespace.
    #[must_use]
    pub fn from_response(raw: &str) -> Self {
        Self(clean_response(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// First keyword of the statement, upper-cased, skipping leading
    /// comments and opening parentheses.
    #[must_use]
    pub fn leading_keyword(&self) -> String {
        let rest = skip_trivia(&self.0);
        let word: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if word.is_empty() {
            rest.chars().next().map(String::from).unwrap_or_default()
        } else {
            word.to_uppercase()
        }
    }

    /// Number of non-empty statements, splitting on top-level semicolons.
    ///
    /// Semicolons inside string literals, quoted identifiers and comments do
    /// not count.
    #[must_use]
    pub fn statement_count(&self) -> usize {
        count_statements(&self.0)
    }
}

impl fmt::Display for GeneratedSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decides whether generated SQL may be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementGuard {
    allow_writes: bool,
}

impl StatementGuard {
    #[must_use]
    pub const fn new(allow_writes: bool) -> Self {
        Self { allow_writes }
    }

    /// Only single read-only statements pass.
    #[must_use]
    pub const fn read_only() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn allows_writes(&self) -> bool {
        self.allow_writes
    }

    /// Check a statement before it reaches the database.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyStatement`] when nothing but whitespace or
    ///   comments is left
    /// - [`ValidationError::MultipleStatements`] when more than one statement
    ///   is present
    /// - [`ValidationError::NotReadOnly`] when writes are disallowed and the
    ///   statement does not start with `SELECT`, `WITH` or `VALUES`
    pub fn check(&self, sql: &GeneratedSql) -> Result<(), ValidationError> {
        match sql.statement_count() {
            0 => return Err(ValidationError::EmptyStatement),
            1 => {}
            _ => return Err(ValidationError::MultipleStatements),
        }

        if !self.allow_writes {
            let keyword = sql.leading_keyword();
            if !READ_ONLY_KEYWORDS.contains(&keyword.as_str()) {
                return Err(ValidationError::NotReadOnly { keyword });
            }
        }

        Ok(())
    }
}

impl Default for StatementGuard {
    fn default() -> Self {
        Self::read_only()
    }
}

fn skip_trivia(mut s: &str) -> &str {
    loop {
        let trimmed = s.trim_start();
        if let Some(rest) = trimmed.strip_prefix("--") {
            s = rest.find('\n').map_or("", |i| &rest[i + 1..]);
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            s = rest.find("*/").map_or("", |i| &rest[i + 2..]);
        } else if let Some(rest) = trimmed.strip_prefix('(') {
            s = rest;
        } else {
            return trimmed;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lex {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

fn count_statements(sql: &str) -> usize {
    let mut count = 0;
    let mut has_content = false;
    let mut state = Lex::Code;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Lex::Code => match c {
                ';' => {
                    if has_content {
                        count += 1;
                    }
                    has_content = false;
                }
                '-' if chars.peek() == Some(&'-') => {
                    chars.next();
                    state = Lex::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Lex::BlockComment;
                }
                '\'' | '"' | '`' => {
                    has_content = true;
                    state = Lex::Quoted(c);
                }
                '[' => {
                    has_content = true;
                    state = Lex::Quoted(']');
                }
                c if c.is_whitespace() => {}
                _ => has_content = true,
            },
            // Doubled quotes ('it''s') close and reopen, which needs no
            // special casing.
            Lex::Quoted(close) => {
                if c == close {
                    state = Lex::Code;
                }
            }
            Lex::LineComment => {
                if c == '\n' {
                    state = Lex::Code;
                }
            }
            Lex::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Lex::Code;
                }
            }
        }
    }

    if has_content {
        count += 1;
    }
    count
}
