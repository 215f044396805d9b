//! Sentiment pipeline orchestration.

use crate::config::SentimentConfig;
use crate::llm::LlmClient;
use crate::sources::{collect_headlines, MarketauxClient, NewsdataClient};
use crate::types::SentimentResult;

/// News-driven sentiment pipeline for one or many tickers.
///
/// All clients are built once in [`SentimentPipeline::new`] and shared for
/// the pipeline's lifetime. A capability whose credential is absent or
/// whose client fails to construct stays disabled — it is never rebuilt on
/// later calls. The pipeline itself is immutable and safe to share across
/// concurrent ticker evaluations.
pub struct SentimentPipeline {
    marketaux: Option<MarketauxClient>,
    newsdata: Option<NewsdataClient>,
    llm: Option<LlmClient>,
}

impl SentimentPipeline {
    /// Build a pipeline from configuration.
    ///
    /// Each capability degrades independently: a missing key or a failed
    /// client construction disables that capability with a single warning
    /// and leaves the rest of the pipeline working.
    #[must_use]
    pub fn new(config: &SentimentConfig) -> Self {
        let marketaux = match &config.marketaux_api_token {
            Some(token) => MarketauxClient::new(
                token,
                config.request_timeout_secs,
                config.max_headlines_per_source,
            )
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to build MarketAux client, source disabled");
            })
            .ok(),
            None => {
                tracing::warn!("MARKETAUX_API_TOKEN not set, skipping MarketAux fetches");
                None
            }
        };

        let newsdata = match &config.newsdata_api_key {
            Some(key) => NewsdataClient::new(
                key,
                config.request_timeout_secs,
                config.max_headlines_per_source,
            )
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to build NewsData client, source disabled");
            })
            .ok(),
            None => {
                tracing::warn!("NEWSDATA_API_KEY not set, skipping NewsData fetches");
                None
            }
        };

        let llm = match &config.deepseek_api_key {
            Some(key) => LlmClient::new(key, config.llm_timeout_secs)
                .map_err(|e| {
                    tracing::warn!(error = %e, "failed to initialize DeepSeek client");
                })
                .ok(),
            None => {
                tracing::warn!("DEEPSEEK_API_KEY not set, news sentiment will be neutral");
                None
            }
        };

        Self {
            marketaux,
            newsdata,
            llm,
        }
    }

    /// Build a pipeline from pre-constructed clients.
    ///
    /// Useful for pointing individual clients at mock servers in tests or
    /// at non-default endpoints.
    #[must_use]
    pub fn with_clients(
        marketaux: Option<MarketauxClient>,
        newsdata: Option<NewsdataClient>,
        llm: Option<LlmClient>,
    ) -> Self {
        Self {
            marketaux,
            newsdata,
            llm,
        }
    }

    /// Fetch recent news for a ticker and return a model-evaluated
    /// sentiment score with a short rationale.
    ///
    /// This function is total: every failure path resolves to a neutral
    /// [`SentimentResult`] rather than an error.
    ///
    /// 1. Collect headlines from both providers (fault-isolated; MarketAux
    ///    items precede NewsData items).
    /// 2. No headlines at all → `(0.0, "No news found.")`, model never
    ///    invoked.
    /// 3. No model client → `(0.0, "LLM client unavailable.")`, no network
    ///    call.
    /// 4. Otherwise score via the model; any failure there →
    ///    `(0.0, "Error")`.
    pub async fn get_aggregated_sentiment(&self, ticker: &str) -> SentimentResult {
        let headlines =
            collect_headlines(self.marketaux.as_ref(), self.newsdata.as_ref(), ticker).await;

        if headlines.is_empty() {
            tracing::info!(ticker, "no headlines collected, returning neutral score");
            return SentimentResult::neutral("No news found.");
        }

        let Some(llm) = &self.llm else {
            return SentimentResult::neutral("LLM client unavailable.");
        };

        match llm.score(ticker, &headlines).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(ticker, error = %e, "LLM scoring failed");
                SentimentResult::neutral("Error")
            }
        }
    }
}
