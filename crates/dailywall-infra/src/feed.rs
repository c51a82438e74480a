//! Image-of-the-day feed client.

use std::time::Duration;

use reqwest::blocking::Client;

use dailywall_core::feed::parse_image_url;
use dailywall_core::{Error, Result};

pub use dailywall_core::feed::FEED_ENDPOINT;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where today's image comes from.
pub trait ImageFeed {
    /// Absolute URL of today's image.
    fn fetch_daily_image_metadata(&self) -> Result<String>;

    fn download_image(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP feed client. One attempt per request, bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct BingFeed {
    client: Client,
    endpoint: String,
}

impl BingFeed {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(format!("build http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Network(format!("GET {url}: {e}")))
    }
}

impl ImageFeed for BingFeed {
    fn fetch_daily_image_metadata(&self) -> Result<String> {
        tracing::info!(endpoint = %self.endpoint, "fetching feed");
        let body = self
            .get(&self.endpoint)?
            .text()
            .map_err(|e| Error::Network(format!("read feed body: {e}")))?;

        tracing::info!("parsing feed");
        parse_image_url(&body)
    }

    fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        tracing::info!(url, "downloading image");
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| Error::Network(format!("read image body: {e}")))?;
        Ok(bytes.to_vec())
    }
}
