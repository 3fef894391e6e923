//! Core types and error definitions for the Readily chatbot.
//!
//! This crate provides the records and the error taxonomy shared by every
//! Readily crate: the catalog client produces the records, the session store
//! keeps them, and the interpreter answers questions about them.
//!
//! # Main types
//!
//! - [`ReadilyError`] - Unified error enum for all Readily subsystems.
//! - [`ReadilyResult`] - Convenience alias for `Result<T, ReadilyError>`.
//! - [`EntityKind`] - Which kind of record (book or author) an error is about.
//! - [`BookRecord`] - A book as returned by the catalog.
//! - [`AuthorRecord`] - An author as returned by the catalog.
//! - [`Review`] - One entry from the catalog's recent reviews feed.

/// Error taxonomy shared across the workspace.
pub mod error;

pub use error::{EntityKind, ReadilyError, ReadilyResult};

use serde::{Deserialize, Serialize};

// --- Catalog records ---

/// A book as described by the remote catalog.
///
/// Absent values are empty strings or empty lists, never `None`: "not
/// available" is something the interpreter reports, not a decoding state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRecord {
    /// Title as normalized by the catalog.
    pub title: String,
    /// Canonical catalog URL of the book.
    pub link: String,
    /// Page count, kept verbatim.
    pub num_pages: String,
    /// Binding/format, e.g. "Paperback".
    pub format: String,
    /// Author names in catalog order.
    pub authors: Vec<String>,
    /// ISBN-10 as published by the catalog.
    pub isbn: String,
    /// Average community rating, kept verbatim.
    pub average_rating: String,
    /// Year of first publication.
    pub publication_year: String,
    /// Free-text description.
    pub description: String,
    /// Language code, e.g. "eng".
    pub language_code: String,
    /// Publisher name.
    pub publisher: String,
    /// Titles of similar books in catalog order.
    pub similar_books: Vec<String>,
}

/// An author as described by the remote catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorRecord {
    /// Display name as normalized by the catalog.
    pub name: String,
    /// Number of works, kept verbatim.
    pub works_count: String,
    /// Gender as reported by the catalog.
    pub gender: String,
    /// Hometown as reported by the catalog.
    pub hometown: String,
    /// Titles of the author's books in catalog order.
    pub book_titles: Vec<String>,
}

/// One entry of the catalog's recent reviews feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Title of the reviewed book.
    pub book_title: String,
    /// Review text.
    pub body: String,
}

impl Review {
    /// Creates a review entry.
    pub fn new(book_title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            book_title: book_title.into(),
            body: body.into(),
        }
    }
}
