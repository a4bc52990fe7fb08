//! HTTP client for the RAWG REST endpoints.
//!
//! [`RawgClient`] owns URL construction and response decoding for the three
//! endpoints the gateway uses (`games`, `games/<id>`, `platforms`).  Every
//! call issues exactly one GET through the injected [`HttpFetch`]
//! implementation -- no retries, no caching.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Game, Page, Platform};

/// Default production base URL for the RAWG API.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Issue a single HTTP GET and return the response body.
///
/// The production implementation is [`ReqwestFetch`]; tests substitute
/// doubles that replay canned bodies or errors without touching the network.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url` and return the body text of a 2xx response.
    async fn get(&self, url: &str) -> Result<String, RawgError>;
}

/// [`HttpFetch`] backed by a [`reqwest::Client`].
///
/// The inner client pools connections, so one instance is shared across all
/// upstream calls for the life of the process.
#[derive(Default)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get(&self, url: &str) -> Result<String, RawgError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RawgError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Errors from the RAWG client layer.
#[derive(Debug, thiserror::Error)]
pub enum RawgError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// RAWG returned a non-2xx status code.
    #[error("RAWG API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode RAWG response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Optional parameters for the `games` list endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct GamesQuery {
    /// Upstream `page_size` parameter.  `None` omits it, leaving the result
    /// count to the upstream default.
    pub page_size: Option<i32>,
    /// Release window, sent as `dates=<start>,<end>`.
    pub dates: Option<(NaiveDate, NaiveDate)>,
}

/// Typed client for the RAWG REST API.
pub struct RawgClient {
    fetch: Arc<dyn HttpFetch>,
    base_url: String,
    api_key: String,
}

impl RawgClient {
    /// Create a client for the given base URL and API key.
    ///
    /// * `fetch`    - transport used for every GET.
    /// * `base_url` - e.g. [`DEFAULT_BASE_URL`], without a trailing slash.
    /// * `api_key`  - RAWG credential, sent as the `key` query parameter.
    pub fn new(
        fetch: Arc<dyn HttpFetch>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            fetch,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// List games.  GET `games?key=<k>[&page_size=<n>][&dates=<start>,<end>]`.
    ///
    /// Results come back in upstream order.
    pub async fn list_games(&self, query: GamesQuery) -> Result<Vec<Game>, RawgError> {
        let mut url = format!("{}/games?key={}", self.base_url, self.api_key);
        if let Some(page_size) = query.page_size {
            url.push_str(&format!("&page_size={page_size}"));
        }
        if let Some((start, end)) = query.dates {
            url.push_str(&format!("&dates={start},{end}"));
        }

        tracing::debug!(endpoint = "games", "Requesting RAWG");
        let body = self.fetch.get(&url).await?;
        let page: Page<Game> = serde_json::from_str(&body)?;
        Ok(page.results)
    }

    /// Fetch one game by id.  GET `games/<id>?key=<k>`.
    ///
    /// An unknown id surfaces as [`RawgError::Status`] with whatever status
    /// upstream answered; the gateway does not translate it.
    pub async fn get_game(&self, id: i32) -> Result<Game, RawgError> {
        let url = format!("{}/games/{}?key={}", self.base_url, id, self.api_key);

        tracing::debug!(endpoint = "games/<id>", id, "Requesting RAWG");
        let body = self.fetch.get(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List platforms.  GET `platforms?key=<k>`.
    pub async fn list_platforms(&self) -> Result<Vec<Platform>, RawgError> {
        let url = format!("{}/platforms?key={}", self.base_url, self.api_key);

        tracing::debug!(endpoint = "platforms", "Requesting RAWG");
        let body = self.fetch.get(&url).await?;
        let page: Page<Platform> = serde_json::from_str(&body)?;
        Ok(page.results)
    }
}
