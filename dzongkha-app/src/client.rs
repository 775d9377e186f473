//! HTTP client for the card service, used by the review and TUI front ends.

use async_trait::async_trait;
use dzongkha_core::{CardSource, CoreError, Flashcard};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, CoreError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            debug!("GET {url}: {e}");
            CoreError::StoreUnavailable("card service unreachable")
        })?;
        if !resp.status().is_success() {
            debug!("GET {url}: {}", resp.status());
            return Err(CoreError::StoreUnavailable("card service error"));
        }
        Ok(resp)
    }
}

#[async_trait]
impl CardSource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<Flashcard>, CoreError> {
        self.get("/api/flashcards")
            .await?
            .json::<Vec<Flashcard>>()
            .await
            .map_err(|_| CoreError::StoreUnavailable("malformed card list"))
    }

    async fn reseed(&self) -> Result<(), CoreError> {
        self.get("/api/init").await.map(|_| ())
    }
}
