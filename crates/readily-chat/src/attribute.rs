//! Attribute tables for the records an attribute query can target.
//!
//! Each entity type exposes one table mapping a query token to an accessor.
//! The classifier validates tokens against the table and the resolver reads
//! through it, so book and author queries share a single code path.

use readily_core::{AuthorRecord, BookRecord, EntityKind};

/// How an attribute is read from a record.
pub enum Accessor<R> {
    /// A single string field, returned verbatim.
    Text(fn(&R) -> &str),
    /// A list field, joined with `separator`.
    List {
        items: fn(&R) -> &[String],
        separator: &'static str,
    },
}

/// One queryable attribute of a record type.
pub struct Attribute<R> {
    /// Canonical lowercase token, e.g. `"number of pages"`.
    pub name: &'static str,
    pub accessor: Accessor<R>,
}

impl<R> Attribute<R> {
    /// Reads the attribute, substituting a fixed sentence for empty values.
    pub fn read(&self, record: &R, kind: EntityKind) -> String {
        match self.accessor {
            Accessor::Text(get) => {
                let value = get(record);
                if value.is_empty() {
                    format!("The {kind}'s {} is not available", self.name)
                } else {
                    value.to_string()
                }
            }
            Accessor::List { items, separator } => {
                let items = items(record);
                if items.is_empty() {
                    format!("The {kind}'s {} are not available", self.name)
                } else {
                    items.join(separator)
                }
            }
        }
    }
}

/// A record type that attribute queries can be answered from.
pub trait Entity: Sized + 'static {
    const KIND: EntityKind;

    fn attributes() -> &'static [Attribute<Self>];

    /// Every field in one labeled block. Empty values keep their label and
    /// are not replaced by the "not available" sentence.
    fn info(&self) -> String;

    /// Case-insensitive table lookup.
    fn attribute(token: &str) -> Option<&'static Attribute<Self>> {
        Self::attributes()
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(token))
    }

    /// Accepted tokens, `info` included, for error messages.
    fn expected_tokens() -> String {
        let mut tokens: Vec<&str> = Self::attributes().iter().map(|attr| attr.name).collect();
        tokens.push("info");
        tokens.join(", ")
    }
}

static BOOK_ATTRIBUTES: &[Attribute<BookRecord>] = &[
    Attribute {
        name: "number of pages",
        accessor: Accessor::Text(|b| b.num_pages.as_str()),
    },
    Attribute {
        name: "format",
        accessor: Accessor::Text(|b| b.format.as_str()),
    },
    Attribute {
        name: "authors",
        accessor: Accessor::List {
            items: |b| b.authors.as_slice(),
            separator: ", ",
        },
    },
    Attribute {
        name: "isbn",
        accessor: Accessor::Text(|b| b.isbn.as_str()),
    },
    Attribute {
        name: "rating",
        accessor: Accessor::Text(|b| b.average_rating.as_str()),
    },
    Attribute {
        name: "publication year",
        accessor: Accessor::Text(|b| b.publication_year.as_str()),
    },
    Attribute {
        name: "description",
        accessor: Accessor::Text(|b| b.description.as_str()),
    },
    Attribute {
        name: "language code",
        accessor: Accessor::Text(|b| b.language_code.as_str()),
    },
    Attribute {
        name: "publisher",
        accessor: Accessor::Text(|b| b.publisher.as_str()),
    },
    Attribute {
        name: "similar books",
        accessor: Accessor::List {
            items: |b| b.similar_books.as_slice(),
            separator: "\n",
        },
    },
];

static AUTHOR_ATTRIBUTES: &[Attribute<AuthorRecord>] = &[
    Attribute {
        name: "number of works",
        accessor: Accessor::Text(|a| a.works_count.as_str()),
    },
    Attribute {
        name: "works",
        accessor: Accessor::List {
            items: |a| a.book_titles.as_slice(),
            separator: "\n",
        },
    },
    Attribute {
        name: "gender",
        accessor: Accessor::Text(|a| a.gender.as_str()),
    },
    Attribute {
        name: "hometown",
        accessor: Accessor::Text(|a| a.hometown.as_str()),
    },
];

impl Entity for BookRecord {
    const KIND: EntityKind = EntityKind::Book;

    fn attributes() -> &'static [Attribute<Self>] {
        BOOK_ATTRIBUTES
    }

    fn info(&self) -> String {
        format!(
            "Number of pages: {}\n\
             Format: {}\n\
             ISBN: {}\n\
             Rating: {}\n\
             Publication Year: {}\n\
             Description: {}\n\
             Language code: {}\n\
             Publisher: {}\n\
             Authors:\n{}",
            self.num_pages,
            self.format,
            self.isbn,
            self.average_rating,
            self.publication_year,
            self.description,
            self.language_code,
            self.publisher,
            self.authors.join(", "),
        )
    }
}

impl Entity for AuthorRecord {
    const KIND: EntityKind = EntityKind::Author;

    fn attributes() -> &'static [Attribute<Self>] {
        AUTHOR_ATTRIBUTES
    }

    fn info(&self) -> String {
        format!(
            "Name: {}\n\
             Number of works: {}\n\
             gender: {}\n\
             hometown: {}\n\
             works:\n{}",
            self.name,
            self.works_count,
            self.gender,
            self.hometown,
            self.book_titles.join("\n"),
        )
    }
}
