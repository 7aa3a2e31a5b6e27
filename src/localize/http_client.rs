//! Async HTTP client wrapping reqwest.
//!
//! Not a browser — one bounded GET per asset. Policy is a single attempt
//! per resource: no retry, no backoff. A failure is the caller's to log
//! and skip.

use anyhow::Result;
use std::time::Duration;

/// Response from a single asset fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

/// HTTP client for asset acquisition.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with standard Chrome user-agent.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform exactly one GET request and read the body.
    pub async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let r = self.client.get(url).send().await?;
        let status = r.status().as_u16();
        let final_url = r.url().to_string();
        let bytes = r.bytes().await?.to_vec();

        Ok(FetchResponse {
            url: url.to_string(),
            final_url,
            status,
            bytes,
        })
    }
}
