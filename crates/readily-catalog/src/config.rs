use serde::{Deserialize, Serialize};

/// Connection settings for the Goodreads catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on the number of reviews returned by `recent_reviews`.
    #[serde(default = "default_recent_reviews_limit")]
    pub recent_reviews_limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.goodreads.com".to_string()
}

fn default_recent_reviews_limit() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl CatalogConfig {
    /// Config pointing at the public Goodreads API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            recent_reviews_limit: default_recent_reviews_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
