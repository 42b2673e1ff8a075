use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// One entry of a relay `items` list
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RelayItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub guid: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
}

/// Relay response body (`{ status, items: [...] }`)
#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<RelayItem>>,
}

/// Relay answered but the answer is unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay rejected feed: {0}")]
    Rejected(String),
    #[error("relay response has no items list")]
    MissingItems,
}

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl RelayResponse {
    /// Items of a successful response, or why there are none
    pub fn into_items(self) -> Result<Vec<RelayItem>, RelayError> {
        if self.status.as_deref() == Some("error") {
            return Err(RelayError::Rejected(
                self.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        self.items.ok_or(RelayError::MissingItems)
    }
}

/// Something that can turn a feed source URL into relay items
///
/// Implemented by [`RelayClient`]; tests substitute canned relays.
pub trait FeedRelay: Send + Sync + 'static {
    fn fetch_items(&self, source: &str) -> impl Future<Output = Result<Vec<RelayItem>>> + Send;
}

/// HTTP client for an RSS-to-JSON relay
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, relay_url })
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Relay URL for one feed source: `<relay>?rss_url=<encoded source>`
    pub fn request_url(&self, source: &str) -> String {
        let separator = if self.relay_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}rss_url={}",
            self.relay_url,
            separator,
            urlencoding::encode(source)
        )
    }

    /// Single GET against the relay; any non-2xx or unparsable body is an error
    pub async fn fetch_feed(&self, source: &str) -> Result<Vec<RelayItem>> {
        let url = self.request_url(source);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach relay for {}", source))?
            .error_for_status()?;

        let body = response
            .text()
            .await
            .context("Failed to read relay response")?;

        let parsed: RelayResponse =
            serde_json::from_str(&body).context("Failed to parse relay response")?;

        Ok(parsed.into_items()?)
    }
}

impl FeedRelay for RelayClient {
    async fn fetch_items(&self, source: &str) -> Result<Vec<RelayItem>> {
        self.fetch_feed(source).await
    }
}
