use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::xml::{AuthorResponse, AuthorUrlResponse, BookResponse, ReviewsResponse};
use async_trait::async_trait;
use readily_core::{AuthorRecord, BookRecord, ReadilyError, ReadilyResult, Review};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Goodreads XML API client.
pub struct GoodreadsClient {
    config: CatalogConfig,
    base: Url,
    http: reqwest::Client,
}

impl GoodreadsClient {
    pub fn new(config: CatalogConfig) -> ReadilyResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            ReadilyError::Config(format!("Invalid catalog base_url '{}': {e}", config.base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(ReadilyError::Config(format!(
                "Catalog base_url '{}' cannot be used as a base URL",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadilyError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, base, http })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_xml<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> ReadilyResult<T> {
        debug!(path = %url.path(), "Goodreads request");

        let resp = self
            .http
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| ReadilyError::Catalog(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ReadilyError::Catalog(e.to_string()))?;

        if !status.is_success() {
            return Err(ReadilyError::Catalog(format!(
                "Goodreads API error {status}: {body}"
            )));
        }

        quick_xml::de::from_str(&body)
            .map_err(|e| ReadilyError::Catalog(format!("Failed to decode Goodreads response: {e}")))
    }
}

#[async_trait]
impl CatalogClient for GoodreadsClient {
    async fn lookup_book(&self, title: &str) -> ReadilyResult<BookRecord> {
        let url = self.endpoint(&["book", "title.xml"]);
        let response: BookResponse = self.get_xml(url, &[("title", title)]).await?;
        let book = BookRecord::from(response.book);
        info!(query = %title, title = %book.title, "Book looked up");
        Ok(book)
    }

    async fn lookup_author(&self, name: &str) -> ReadilyResult<AuthorRecord> {
        let url = self.endpoint(&["api", "author_url", name]);
        let found: AuthorUrlResponse = self.get_xml(url, &[]).await?;
        let id = found.author.id.trim();
        if id.is_empty() {
            info!(query = %name, "No author id for name");
            return Ok(AuthorRecord::default());
        }

        let url = self.endpoint(&["author", "show", id]);
        let response: AuthorResponse = self.get_xml(url, &[("format", "xml")]).await?;
        let author = AuthorRecord::from(response.author);
        info!(query = %name, author_id = %id, name = %author.name, "Author looked up");
        Ok(author)
    }

    async fn recent_reviews(&self) -> ReadilyResult<Vec<Review>> {
        let url = self.endpoint(&["review", "recent_reviews.xml"]);
        let response: ReviewsResponse = self.get_xml(url, &[]).await?;
        let reviews: Vec<Review> = response
            .reviews
            .reviews
            .into_iter()
            .take(self.config.recent_reviews_limit)
            .map(Review::from)
            .collect();
        debug!(count = reviews.len(), "Recent reviews fetched");
        Ok(reviews)
    }
}
