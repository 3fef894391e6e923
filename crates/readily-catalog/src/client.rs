use async_trait::async_trait;
use readily_core::{AuthorRecord, BookRecord, ReadilyResult, Review};

/// Trait for catalog backends.
///
/// Implementations turn an entity name into a fully populated record. A
/// catalog that knows nothing about the name returns an empty or partial
/// record; `Err` is reserved for failures of the catalog itself (transport,
/// status, decoding), which the interpreter does not retry.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Looks up a book by title.
    async fn lookup_book(&self, title: &str) -> ReadilyResult<BookRecord>;

    /// Looks up an author by name.
    async fn lookup_author(&self, name: &str) -> ReadilyResult<AuthorRecord>;

    /// Returns the most recent community reviews, newest first.
    async fn recent_reviews(&self) -> ReadilyResult<Vec<Review>>;
}
