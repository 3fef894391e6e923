//! Message classification.
//!
//! Prefixes are tested in a fixed order and compared ASCII case-insensitively
//! against the original text, so entity names keep the case they were typed
//! in. Exactly one command is produced per message.

use crate::attribute::{Attribute, Entity};
use readily_core::{AuthorRecord, BookRecord, EntityKind, ReadilyError, ReadilyResult};
use readily_session::SessionContext;
use std::fmt;

const HELP: &str = "help";
const GET_THE_BOOK: &str = "get the book";
const GET_BOOK: &str = "get book";
const GET_LATEST_REVIEWS: &str = "get latest reviews";
const GET_THE_AUTHOR: &str = "get the author";
const GET_AUTHOR: &str = "get author";

/// What an attribute query asks for.
///
/// A field selector can only be obtained from the attribute table of `R`,
/// so resolving it never meets an unknown token.
pub enum Selector<R: 'static> {
    /// The labeled block with every field.
    Info,
    /// One attribute of the table.
    Field(&'static Attribute<R>),
}

impl<R: Entity> Selector<R> {
    /// Validates `token` against the attribute table of `R`.
    pub fn parse(token: &str) -> ReadilyResult<Self> {
        let normalized = token.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.eq_ignore_ascii_case("info") {
            return Ok(Selector::Info);
        }
        R::attribute(&normalized)
            .map(Selector::Field)
            .ok_or_else(|| ReadilyError::UnknownAttribute {
                kind: R::KIND,
                attribute: normalized,
                expected: R::expected_tokens(),
            })
    }
}

impl<R: 'static> Clone for Selector<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for Selector<R> {}

impl<R: 'static> PartialEq for Selector<R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Selector::Info, Selector::Info) => true,
            (Selector::Field(a), Selector::Field(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl<R: 'static> Eq for Selector<R> {}

impl<R: 'static> fmt::Debug for Selector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Info => f.write_str("Info"),
            Selector::Field(attr) => f.debug_tuple("Field").field(&attr.name).finish(),
        }
    }
}

/// The single action a message denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// `get the book <title>`
    LookupBook(String),
    /// `get book <attribute>`
    LookupBookAttribute(Selector<BookRecord>),
    /// `get latest reviews`
    RecentReviews,
    /// `get the author <name>`
    LookupAuthor(String),
    /// `get author <attribute>`
    LookupAuthorAttribute(Selector<AuthorRecord>),
    /// Anything else; answered with the welcome text.
    Unrecognized,
}

impl Command {
    /// Classifies a message on its text alone.
    ///
    /// Fails for lookups without a name and for attribute tokens outside the
    /// entity's table. Whether a record is bound is checked by [`classify`].
    pub fn parse(message: &str) -> ReadilyResult<Self> {
        let message = message.trim();

        if message
            .split_whitespace()
            .next()
            .is_some_and(|word| word.eq_ignore_ascii_case(HELP))
        {
            return Ok(Command::Help);
        }
        if let Some(title) = strip_prefix_ignore_case(message, GET_THE_BOOK) {
            return entity_name(title, EntityKind::Book).map(Command::LookupBook);
        }
        if let Some(token) = strip_prefix_ignore_case(message, GET_BOOK) {
            return Selector::parse(token).map(Command::LookupBookAttribute);
        }
        if strip_prefix_ignore_case(message, GET_LATEST_REVIEWS).is_some() {
            return Ok(Command::RecentReviews);
        }
        if let Some(name) = strip_prefix_ignore_case(message, GET_THE_AUTHOR) {
            return entity_name(name, EntityKind::Author).map(Command::LookupAuthor);
        }
        if let Some(token) = strip_prefix_ignore_case(message, GET_AUTHOR) {
            return Selector::parse(token).map(Command::LookupAuthorAttribute);
        }
        Ok(Command::Unrecognized)
    }

    /// Kind of record this command needs bound in the context, if any.
    pub fn required_context(&self) -> Option<EntityKind> {
        match self {
            Command::LookupBookAttribute(_) => Some(EntityKind::Book),
            Command::LookupAuthorAttribute(_) => Some(EntityKind::Author),
            _ => None,
        }
    }
}

/// Classifies a message against the current session context.
pub fn classify(message: &str, context: &SessionContext) -> ReadilyResult<Command> {
    let command = Command::parse(message)?;
    match command.required_context() {
        Some(EntityKind::Book) if context.book.is_none() => {
            Err(ReadilyError::MissingContext(EntityKind::Book))
        }
        Some(EntityKind::Author) if context.author.is_none() => {
            Err(ReadilyError::MissingContext(EntityKind::Author))
        }
        _ => Ok(command),
    }
}

fn strip_prefix_ignore_case<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let head = message.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        message.get(prefix.len()..)
    } else {
        None
    }
}

fn entity_name(rest: &str, kind: EntityKind) -> ReadilyResult<String> {
    let name = rest.trim();
    if name.is_empty() {
        Err(ReadilyError::MissingEntityName(kind))
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(message: &str) -> Command {
        Command::parse(message).unwrap()
    }

    fn field<R: Entity>(name: &str) -> Selector<R> {
        Selector::Field(R::attribute(name).unwrap())
    }

    #[test]
    fn test_help() {
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("  HELP me "), Command::Help);
        assert_eq!(parse("helpful tips"), Command::Unrecognized);
    }

    #[test]
    fn test_lookup_book_keeps_title_case() {
        assert_eq!(
            parse("Get The Book  The Left Hand of Darkness "),
            Command::LookupBook("The Left Hand of Darkness".into())
        );
    }

    #[test]
    fn test_lookup_without_name_is_rejected() {
        assert!(matches!(
            Command::parse("get the book"),
            Err(ReadilyError::MissingEntityName(EntityKind::Book))
        ));
        assert!(matches!(
            Command::parse("get the author    "),
            Err(ReadilyError::MissingEntityName(EntityKind::Author))
        ));
    }

    #[test]
    fn test_attribute_case_insensitive() {
        assert_eq!(parse("Get Book Format"), parse("get book format"));
        assert_eq!(
            parse("GET BOOK Number   Of Pages"),
            Command::LookupBookAttribute(field("number of pages"))
        );
        assert_eq!(
            parse("get author INFO"),
            Command::LookupAuthorAttribute(Selector::Info)
        );
    }

    #[test]
    fn test_unknown_attribute_is_not_unrecognized() {
        let err = Command::parse("get book weight").unwrap_err();
        assert!(matches!(
            err,
            ReadilyError::UnknownAttribute { kind: EntityKind::Book, ref attribute, .. } if attribute == "weight"
        ));

        // attributes of the other entity type are not accepted either
        assert!(Command::parse("get author isbn").is_err());
        assert!(Command::parse("get book").is_err());
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(parse("get latest reviews"), Command::RecentReviews);
        assert_eq!(parse("Get Latest Reviews now"), Command::RecentReviews);
        assert_eq!(
            parse("get the author Dan Brown"),
            Command::LookupAuthor("Dan Brown".into())
        );
        assert_eq!(
            parse("get author works"),
            Command::LookupAuthorAttribute(field("works"))
        );
        assert_eq!(parse("hello there"), Command::Unrecognized);
        assert_eq!(parse(""), Command::Unrecognized);
    }

    #[test]
    fn test_non_ascii_message_does_not_panic() {
        assert_eq!(parse("ñññññññññññññ"), Command::Unrecognized);
        assert_eq!(
            parse("get the book Cien años de soledad"),
            Command::LookupBook("Cien años de soledad".into())
        );
    }

    #[test]
    fn test_classify_requires_bound_record() {
        let mut context = SessionContext::new();
        assert!(matches!(
            classify("get book isbn", &context),
            Err(ReadilyError::MissingContext(EntityKind::Book))
        ));
        assert!(matches!(
            classify("get author gender", &context),
            Err(ReadilyError::MissingContext(EntityKind::Author))
        ));

        context.store_book(BookRecord::default());
        assert_eq!(
            classify("get book isbn", &context).unwrap(),
            Command::LookupBookAttribute(field("isbn"))
        );
        // still no author
        assert!(classify("get author gender", &context).is_err());
    }

    #[test]
    fn test_classify_lookups_need_no_context() {
        let context = SessionContext::new();
        assert_eq!(
            classify("get the book Dune", &context).unwrap(),
            Command::LookupBook("Dune".into())
        );
        assert_eq!(classify("whatever", &context).unwrap(), Command::Unrecognized);
    }

    #[test]
    fn test_selector_carries_table_entry() {
        let Selector::Field(attr) = Selector::<BookRecord>::parse("  RATING ").unwrap() else {
            panic!("expected a field selector");
        };
        assert_eq!(attr.name, "rating");
        assert!(std::ptr::eq(attr, BookRecord::attribute("rating").unwrap()));
        assert_ne!(field::<BookRecord>("rating"), Selector::Info);
        assert_eq!(format!("{:?}", field::<AuthorRecord>("works")), "Field(\"works\")");
    }
}
