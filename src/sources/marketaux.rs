//! MarketAux finance-news client.
//!
//! Queries `/v1/news/all` with the ticker as a symbol filter and entity
//! filtering enabled. Each article's first entity carries an optional
//! `sentiment_score` that is surfaced on the rendered headline.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::{Annotation, Headline};

const DEFAULT_BASE_URL: &str = "https://api.marketaux.com";
const USER_AGENT: &str = "ticker-sentiment/0.1";

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    data: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    sentiment_score: Option<f64>,
}

/// Client for the MarketAux news API.
///
/// Use [`MarketauxClient::new`] for production or
/// [`MarketauxClient::with_base_url`] to point at a mock server in tests.
pub struct MarketauxClient {
    client: Client,
    api_token: String,
    endpoint: Url,
    max_headlines: usize,
}

impl MarketauxClient {
    /// Creates a new client pointed at the production MarketAux API.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_token: &str,
        timeout_secs: u64,
        max_headlines: usize,
    ) -> Result<Self, SentimentError> {
        Self::with_base_url(api_token, timeout_secs, max_headlines, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SentimentError::Api`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_token: &str,
        timeout_secs: u64,
        max_headlines: usize,
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        let endpoint = Url::parse(&format!(
            "{}/v1/news/all",
            base_url.trim_end_matches('/')
        ))
        .map_err(|e| SentimentError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_token: api_token.to_owned(),
            endpoint,
            max_headlines,
        })
    }

    /// Fetches entity-tagged headlines for a ticker.
    ///
    /// Returns at most `max_headlines` items in provider order. Articles
    /// without a title contribute `"Untitled"`; articles whose first entity
    /// has no `sentiment_score` render as `(Sentiment: N/A)`.
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
            pairs.append_pair("api_token", &self.api_token);
            pairs.append_pair("symbols", ticker);
            pairs.append_pair("filter_entities", "true");
            pairs.append_pair("language", "en");
        }

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let payload: NewsResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("marketaux news for {ticker}"),
                source: e,
            })?;

        let headlines = payload
            .data
            .into_iter()
            .take(self.max_headlines)
            .map(|article| {
                let sentiment = article
                    .entities
                    .into_iter()
                    .next()
                    .and_then(|entity| entity.sentiment_score);
                Headline {
                    title: article.title.unwrap_or_else(|| "Untitled".to_string()),
                    annotation: Annotation::EntitySentiment(sentiment),
                }
            })
            .collect();

        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_article_with_entity_score() {
        let json = r#"{
            "data": [
                {
                    "title": "ACME surges on earnings",
                    "entities": [ { "sentiment_score": 0.6134 } ]
                }
            ]
        }"#;
        let payload: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].entities[0].sentiment_score, Some(0.6134));
    }

    #[test]
    fn deserialize_tolerates_missing_fields() {
        let json = r#"{ "data": [ {}, { "title": "No entities here" } ] }"#;
        let payload: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data.len(), 2);
        assert!(payload.data[0].title.is_none());
        assert!(payload.data[1].entities.is_empty());
    }

    #[test]
    fn deserialize_missing_data_key_is_empty() {
        let payload: NewsResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.data.is_empty());
    }

    #[test]
    fn deserialize_extra_fields_ignored() {
        let json = r#"{
            "meta": { "found": 120, "returned": 1 },
            "data": [
                {
                    "uuid": "abc-123",
                    "title": "ACME",
                    "published_at": "2025-06-01T00:00:00Z",
                    "entities": [ { "symbol": "ACME", "sentiment_score": -0.2 } ]
                }
            ]
        }"#;
        let payload: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data[0].entities[0].sentiment_score, Some(-0.2));
    }
}
