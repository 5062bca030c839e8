use std::fmt;

/// A free-text question typed by the user.
///
/// No length or content rules are enforced; the text is forwarded to the
/// model verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing worth sending to the model.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Question {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(Question::new("").is_blank());
        assert!(Question::new("  \n\t").is_blank());
        assert!(!Question::new("who scored highest?").is_blank());
    }

    #[test]
    fn keeps_text_verbatim() {
        let q = Question::new("  spaced  ");
        assert_eq!(q.as_str(), "  spaced  ");
        assert_eq!(q.to_string(), "  spaced  ");
    }
}
