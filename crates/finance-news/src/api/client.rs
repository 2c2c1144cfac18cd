//! Shared HTTP session for every news source

use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use reqwest::Client;

/// Holds the one HTTP client the whole bot uses.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NewsHttpClient {
    client: Client,
}

impl NewsHttpClient {
    /// Create the shared client with the configured timeout
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON. Non-2xx statuses are errors.
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
