//! Wire shapes of the Goodreads XML responses.
//!
//! Only the elements the chatbot reports on are modelled; everything else in
//! a response is skipped by the deserializer. Every field defaults to empty so
//! that a sparse response still decodes into a record.

use readily_core::{AuthorRecord, BookRecord, Review};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BookResponse {
    pub book: XmlBook,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlBook {
    pub title: String,
    pub link: String,
    pub num_pages: String,
    pub format: String,
    pub authors: XmlAuthorList,
    pub isbn: String,
    pub average_rating: String,
    pub publication_year: String,
    pub description: String,
    pub language_code: String,
    pub publisher: String,
    pub similar_books: XmlBookList,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlAuthorList {
    #[serde(rename = "author")]
    pub authors: Vec<XmlAuthorName>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlAuthorName {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlBookList {
    #[serde(rename = "book")]
    pub books: Vec<XmlTitle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlTitle {
    pub title: String,
}

/// `api/author_url/{name}`: resolves a name to an author id.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AuthorUrlResponse {
    pub author: XmlAuthorRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlAuthorRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// `author/show/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AuthorResponse {
    pub author: XmlAuthor,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlAuthor {
    pub name: String,
    pub works_count: String,
    pub gender: String,
    pub hometown: String,
    pub books: XmlBookList,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ReviewsResponse {
    pub reviews: XmlReviewList,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlReviewList {
    #[serde(rename = "review")]
    pub reviews: Vec<XmlReview>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlReview {
    pub book: XmlTitle,
    pub body: String,
}

fn clean(value: String) -> String {
    value.trim().to_string()
}

fn titles(list: XmlBookList) -> Vec<String> {
    list.books.into_iter().map(|b| clean(b.title)).collect()
}

impl From<XmlBook> for BookRecord {
    fn from(book: XmlBook) -> Self {
        Self {
            title: clean(book.title),
            link: clean(book.link),
            num_pages: clean(book.num_pages),
            format: clean(book.format),
            authors: book
                .authors
                .authors
                .into_iter()
                .map(|a| clean(a.name))
                .collect(),
            isbn: clean(book.isbn),
            average_rating: clean(book.average_rating),
            publication_year: clean(book.publication_year),
            description: clean(book.description),
            language_code: clean(book.language_code),
            publisher: clean(book.publisher),
            similar_books: titles(book.similar_books),
        }
    }
}

impl From<XmlAuthor> for AuthorRecord {
    fn from(author: XmlAuthor) -> Self {
        Self {
            name: clean(author.name),
            works_count: clean(author.works_count),
            gender: clean(author.gender),
            hometown: clean(author.hometown),
            book_titles: titles(author.books),
        }
    }
}

impl From<XmlReview> for Review {
    fn from(review: XmlReview) -> Self {
        Review::new(clean(review.book.title), clean(review.body))
    }
}
