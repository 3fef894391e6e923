//! Catalog client for the Readily chatbot.
//!
//! The interpreter only sees the [`CatalogClient`] trait. [`GoodreadsClient`]
//! implements it against the Goodreads XML API.

pub mod client;
pub mod config;
pub mod goodreads;
mod xml;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use goodreads::GoodreadsClient;
