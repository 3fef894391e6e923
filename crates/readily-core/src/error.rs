use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A convenience `Result` alias using [`ReadilyError`].
pub type ReadilyResult<T> = Result<T, ReadilyError>;

/// The kind of catalog entity a command or an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A book, looked up by title.
    Book,
    /// An author, looked up by name.
    Author,
}

impl EntityKind {
    /// The noun used in replies ("book", "author").
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Book => "book",
            EntityKind::Author => "author",
        }
    }

    /// The noun with its indefinite article ("a book", "an author").
    pub fn with_article(self) -> &'static str {
        match self {
            EntityKind::Book => "a book",
            EntityKind::Author => "an author",
        }
    }

    /// What a lookup of this kind is keyed by ("book title", "author name").
    pub fn lookup_key(self) -> &'static str {
        match self {
            EntityKind::Book => "a book title",
            EntityKind::Author => "an author name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Top-level error type for Readily.
///
/// The first three variants are user input errors: the message was understood
/// but cannot be executed against the current session. Everything else is a
/// failure of the service or one of its collaborators.
#[derive(Debug, Error)]
pub enum ReadilyError {
    /// A lookup command was sent without the entity name.
    #[error("Please enter {}!", .0.lookup_key())]
    MissingEntityName(EntityKind),

    /// An attribute was requested before any record of that kind was looked up.
    #[error("Please provide {} first!", .0.with_article())]
    MissingContext(EntityKind),

    /// An attribute token outside the enumerated set for the entity kind.
    #[error(
        "Unknown {kind} attribute '{attribute}'. Please provide {} first, then ask for one of: {expected}",
        .kind.with_article()
    )]
    UnknownAttribute {
        /// Entity kind the attribute was asked about.
        kind: EntityKind,
        /// The attribute token as typed.
        attribute: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },

    /// The remote catalog could not produce a record.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// No session is registered under the given token.
    #[error("No session found for: {0}.")]
    SessionNotFound(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadilyError {
    /// Returns true for errors caused by the user's message rather than by
    /// the service. These leave the session untouched and are safe to show.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReadilyError::MissingEntityName(_)
                | ReadilyError::MissingContext(_)
                | ReadilyError::UnknownAttribute { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_messages() {
        assert_eq!(
            ReadilyError::MissingEntityName(EntityKind::Book).to_string(),
            "Please enter a book title!"
        );
        assert_eq!(
            ReadilyError::MissingEntityName(EntityKind::Author).to_string(),
            "Please enter an author name!"
        );
        assert_eq!(
            ReadilyError::MissingContext(EntityKind::Book).to_string(),
            "Please provide a book first!"
        );
        assert_eq!(
            ReadilyError::MissingContext(EntityKind::Author).to_string(),
            "Please provide an author first!"
        );
    }

    #[test]
    fn test_unknown_attribute_mentions_context() {
        let err = ReadilyError::UnknownAttribute {
            kind: EntityKind::Author,
            attribute: "shoe size".into(),
            expected: "gender, info".into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("Unknown author attribute 'shoe size'."));
        assert!(text.contains("Please provide an author first"));
        assert!(text.ends_with("gender, info"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(ReadilyError::MissingContext(EntityKind::Book).is_user_error());
        assert!(ReadilyError::MissingEntityName(EntityKind::Author).is_user_error());
        assert!(!ReadilyError::Catalog("timeout".into()).is_user_error());
        assert!(!ReadilyError::SessionNotFound("abc".into()).is_user_error());
    }
}
