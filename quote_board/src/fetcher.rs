//! Blocking HTTP transport for the quote feed.
use std::time::Duration;

use log::debug;
use quote_feed::{QuoteError, QuoteFetcher, Result};
use reqwest::blocking::Client;

/// Fetches feed responses over HTTP with a per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(HttpFetcher { client })
    }
}

impl QuoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;
        let body = response.text().map_err(transport)?;
        debug!("Received {} bytes from the feed", body.len());
        Ok(body)
    }
}

fn transport(err: reqwest::Error) -> QuoteError {
    QuoteError::Transport(err.to_string())
}
