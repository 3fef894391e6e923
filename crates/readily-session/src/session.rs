use chrono::{DateTime, Utc};
use readily_core::{AuthorRecord, BookRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Per-session memory read and written by the interpreter.
///
/// A slot is either empty or holds a complete record. Slots are only replaced
/// by a new lookup of the same kind; attribute queries never clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Most recently looked-up book.
    #[serde(default)]
    pub book: Option<BookRecord>,
    /// Most recently looked-up author.
    #[serde(default)]
    pub author: Option<AuthorRecord>,
    /// Free-form context for processors other than the built-in interpreter.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_book(&mut self, book: BookRecord) -> &BookRecord {
        self.book.insert(book)
    }

    pub fn store_author(&mut self, author: AuthorRecord) -> &AuthorRecord {
        self.author.insert(author)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token handed to the client by `/welcome`.
    pub token: String,
    pub context: SessionContext,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::with_token(Uuid::new_v4().simple().to_string())
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            token: token.into(),
            context: SessionContext::new(),
            created_at: now,
            updated_at: now,
            message_count: 0,
        }
    }

    /// Records that one more message was processed in this session.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.message_count += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
