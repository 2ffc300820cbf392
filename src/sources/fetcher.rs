use std::time::Duration;

use reqwest::blocking::Client;
use tracing::warn;

use crate::errors::{FeedGenError, FeedGenResult};

#[cfg_attr(test, mockall::automock)]
pub trait PageFetcher: Send + Sync {
    /// Download the page at `url` and return its body as text
    fn fetch(&self, url: &str) -> FeedGenResult<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> FeedGenResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedGenError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FeedGenResult<String> {
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| {
                warn!(%url, "fetch failed: {}", e);
                FeedGenError::FetchFailed(e.to_string())
            })
    }
}
