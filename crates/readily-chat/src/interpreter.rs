use crate::attribute::Entity;
use crate::command::{classify, Command, Selector};
use crate::lookup;
use crate::processor::MessageProcessor;
use crate::welcome::WELCOME_MESSAGE;
use async_trait::async_trait;
use readily_catalog::CatalogClient;
use readily_core::{EntityKind, ReadilyError, ReadilyResult};
use readily_session::SessionContext;
use std::sync::Arc;
use tracing::debug;

/// The built-in processor: classifies a message, runs it against the catalog
/// or the bound records, and produces the reply.
pub struct Interpreter {
    catalog: Arc<dyn CatalogClient>,
    welcome: String,
}

impl Interpreter {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            catalog,
            welcome: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Replaces the welcome/help text.
    pub fn with_welcome_message(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    /// Runs an already classified command.
    pub async fn execute(
        &self,
        context: &mut SessionContext,
        command: Command,
    ) -> ReadilyResult<String> {
        match command {
            Command::Help | Command::Unrecognized => Ok(self.welcome.clone()),
            Command::LookupBook(title) => {
                lookup::lookup_book(self.catalog.as_ref(), context, &title).await
            }
            Command::LookupAuthor(name) => {
                lookup::lookup_author(self.catalog.as_ref(), context, &name).await
            }
            Command::RecentReviews => lookup::recent_reviews(self.catalog.as_ref()).await,
            Command::LookupBookAttribute(selector) => context
                .book
                .as_ref()
                .map(|book| resolve(book, selector))
                .ok_or(ReadilyError::MissingContext(EntityKind::Book)),
            Command::LookupAuthorAttribute(selector) => context
                .author
                .as_ref()
                .map(|author| resolve(author, selector))
                .ok_or(ReadilyError::MissingContext(EntityKind::Author)),
        }
    }
}

/// Answers an attribute query from a bound record.
pub fn resolve<R: Entity>(record: &R, selector: Selector<R>) -> String {
    match selector {
        Selector::Info => record.info(),
        Selector::Field(attr) => attr.read(record, R::KIND),
    }
}

#[async_trait]
impl MessageProcessor for Interpreter {
    fn welcome_message(&self) -> &str {
        &self.welcome
    }

    async fn process(&self, context: &mut SessionContext, message: &str) -> ReadilyResult<String> {
        let command = classify(message, context)?;
        debug!(command = ?command, "Message classified");
        self.execute(context, command).await
    }
}
