//! Banner messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the last user action, shown as a banner.
///
/// The tag decides how the banner is styled; the text is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Message {
    Success(String),
    Failure(String),
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure(text.into())
    }

    /// Tag untagged text with the legacy rule: anything mentioning "error",
    /// in any case, is a failure.
    pub fn from_legacy_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.to_lowercase().contains("error") {
            Self::Failure(text)
        } else {
            Self::Success(text)
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_classification() {
        assert!(Message::from_legacy_text("Error adding book.").is_failure());
        assert!(Message::from_legacy_text("Server ERROR").is_failure());
        assert!(!Message::from_legacy_text("Book added successfully.").is_failure());
        // Not an "error" string, so the legacy rule calls it a success
        assert!(!Message::from_legacy_text("Book not found.").is_failure());
    }

    #[test]
    fn test_tag_is_independent_of_text() {
        let message = Message::success("Deleted book with error-free id 3");
        assert!(!message.is_failure());
        assert_eq!(message.text(), "Deleted book with error-free id 3");
    }
}
