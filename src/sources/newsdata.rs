//! NewsData.io general business-news client.
//!
//! Queries `/api/1/news` with the ticker as a free-text query, restricted
//! to English-language business coverage. Headlines carry the publisher's
//! `source_id` as their annotation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::{Annotation, Headline};

const DEFAULT_BASE_URL: &str = "https://newsdata.io";
const USER_AGENT: &str = "ticker-sentiment/0.1";

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    results: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    source_id: Option<String>,
}

/// Client for the NewsData.io API.
///
/// Use [`NewsdataClient::new`] for production or
/// [`NewsdataClient::with_base_url`] to point at a mock server in tests.
pub struct NewsdataClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    max_headlines: usize,
}

impl NewsdataClient {
    /// Creates a new client pointed at the production NewsData.io API.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        max_headlines: usize,
    ) -> Result<Self, SentimentError> {
        Self::with_base_url(api_key, timeout_secs, max_headlines, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SentimentError::Api`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        max_headlines: usize,
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        let endpoint = Url::parse(&format!("{}/api/1/news", base_url.trim_end_matches('/')))
            .map_err(|e| SentimentError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            max_headlines,
        })
    }

    /// Fetches business-category headlines matching a ticker.
    ///
    /// Returns at most `max_headlines` items in provider order. Missing or
    /// empty titles contribute `"Untitled"`; missing or empty source ids
    /// render as `(Source: unknown source)`.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Http`] on network failure, timeout, or non-2xx
    ///   status.
    /// - [`SentimentError::Deserialize`] if the body is not the expected
    ///   JSON shape.
    pub async fn fetch(&self, ticker: &str) -> Result<Vec<Headline>, SentimentError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("q", ticker);
            pairs.append_pair("language", "en");
            pairs.append_pair("category", "business");
        }

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let payload: NewsResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("newsdata news for {ticker}"),
                source: e,
            })?;

        let headlines = payload
            .results
            .into_iter()
            .take(self.max_headlines)
            .map(|article| {
                let title = article
                    .title
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "Untitled".to_string());
                let source = article.source_id.filter(|s| !s.is_empty());
                Headline {
                    title,
                    annotation: Annotation::Source(source),
                }
            })
            .collect();

        Ok(headlines)
    }
}
