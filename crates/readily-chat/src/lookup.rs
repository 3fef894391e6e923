//! Commands that go to the catalog.
//!
//! Catalog failures propagate unchanged and leave the context as it was.

use readily_catalog::CatalogClient;
use readily_core::{ReadilyResult, Review};
use readily_session::SessionContext;
use tracing::info;

/// Fetches a book and binds it, replacing any previous book.
pub async fn lookup_book(
    catalog: &dyn CatalogClient,
    context: &mut SessionContext,
    title: &str,
) -> ReadilyResult<String> {
    let book = catalog.lookup_book(title).await?;
    let book = context.store_book(book);
    info!(query = %title, title = %book.title, "Book bound to session");
    Ok(format!(
        "OK, I found the book {}. What do you want to know?",
        book.title
    ))
}

/// Fetches an author and binds it, replacing any previous author.
pub async fn lookup_author(
    catalog: &dyn CatalogClient,
    context: &mut SessionContext,
    name: &str,
) -> ReadilyResult<String> {
    let author = catalog.lookup_author(name).await?;
    let author = context.store_author(author);
    info!(query = %name, name = %author.name, "Author bound to session");
    Ok(format!(
        "OK, I found the author {}. What do you want to know?",
        author.name
    ))
}

/// Fetches the latest reviews and renders them with [`render_reviews`].
pub async fn recent_reviews(catalog: &dyn CatalogClient) -> ReadilyResult<String> {
    let reviews = catalog.recent_reviews().await?;
    Ok(render_reviews(&reviews))
}

/// Two lines per review, in catalog order. No reviews renders as "".
pub fn render_reviews(reviews: &[Review]) -> String {
    reviews
        .iter()
        .map(|review| format!("Book title: {}\nBody: {}\n", review.book_title, review.body))
        .collect()
}
