//! Command interpreter for the Readily chatbot.
//!
//! A message goes through three steps:
//!
//! 1. [`classify`] turns the raw text into a [`Command`], rejecting lookups
//!    without a name and attribute queries without a bound record.
//! 2. Lookups go to the [`CatalogClient`](readily_catalog::CatalogClient) and
//!    overwrite the matching slot of the [`SessionContext`](readily_session::SessionContext).
//! 3. Attribute queries are answered from the bound record through the
//!    per-entity [`Attribute`] tables.
//!
//! [`Interpreter`] ties the steps together behind the [`MessageProcessor`]
//! trait the HTTP gateway depends on.

pub mod attribute;
pub mod command;
pub mod interpreter;
pub mod lookup;
pub mod processor;
pub mod welcome;

pub use attribute::{Accessor, Attribute, Entity};
pub use command::{classify, Command, Selector};
pub use interpreter::{resolve, Interpreter};
pub use processor::MessageProcessor;
pub use welcome::WELCOME_MESSAGE;
