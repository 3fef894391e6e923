//! Session management for Readily conversations.

pub mod session;
pub mod store;
pub mod sweeper;

pub use session::{Session, SessionContext};
pub use store::{EvictionPolicy, InMemorySessionStore, SessionHandle, SessionStore};
pub use sweeper::spawn_sweeper;
