//! Environment-resolved pipeline configuration.
//!
//! Every capability is optional: a missing credential disables that
//! provider (or the model) without failing construction as a whole.

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_HEADLINES_PER_SOURCE: usize = 3;

/// Configuration for the sentiment pipeline.
#[derive(Clone)]
pub struct SentimentConfig {
    /// MarketAux API token. `None` disables the finance-news source.
    pub marketaux_api_token: Option<String>,
    /// NewsData.io API key. `None` disables the general-news source.
    pub newsdata_api_key: Option<String>,
    /// DeepSeek API key. `None` makes every score neutral.
    pub deepseek_api_key: Option<String>,
    /// Per-request bound for the news providers, in seconds.
    pub request_timeout_secs: u64,
    /// Per-request bound for the model call, in seconds.
    pub llm_timeout_secs: u64,
    /// Maximum headlines each provider contributes per invocation.
    pub max_headlines_per_source: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            marketaux_api_token: None,
            newsdata_api_key: None,
            deepseek_api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            max_headlines_per_source: DEFAULT_MAX_HEADLINES_PER_SOURCE,
        }
    }
}

impl SentimentConfig {
    /// Load configuration from the environment.
    ///
    /// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
    /// env vars.
    #[must_use]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables already in the process.
    ///
    /// Unlike [`SentimentConfig::load`], this does NOT load `.env` files.
    #[must_use]
    pub fn from_env() -> Self {
        Self::build(|key| std::env::var(key))
    }

    /// Build configuration using the provided env-var lookup function.
    ///
    /// The core resolution logic is decoupled from the actual environment
    /// so it can be tested with a pure `HashMap` lookup — no
    /// `set_var`/`remove_var` needed.
    fn build<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let parse_u64 = |var: &str, default: u64| -> u64 {
            match lookup(var) {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    tracing::warn!(var, raw = %raw, "invalid value, using default");
                    default
                }),
                Err(_) => default,
            }
        };

        let parse_usize = |var: &str, default: usize| -> usize {
            match lookup(var) {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    tracing::warn!(var, raw = %raw, "invalid value, using default");
                    default
                }),
                Err(_) => default,
            }
        };

        Self {
            marketaux_api_token: lookup("MARKETAUX_API_TOKEN").ok(),
            newsdata_api_key: lookup("NEWSDATA_API_KEY").ok(),
            deepseek_api_key: lookup("DEEPSEEK_API_KEY").ok(),
            request_timeout_secs: parse_u64(
                "SENTIMENT_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            llm_timeout_secs: parse_u64("SENTIMENT_LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS),
            max_headlines_per_source: parse_usize(
                "SENTIMENT_MAX_HEADLINES_PER_SOURCE",
                DEFAULT_MAX_HEADLINES_PER_SOURCE,
            ),
        }
    }
}

impl std::fmt::Debug for SentimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentConfig")
            .field(
                "marketaux_api_token",
                &self.marketaux_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "newsdata_api_key",
                &self.newsdata_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "deepseek_api_key",
                &self.deepseek_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("max_headlines_per_source", &self.max_headlines_per_source)
            .finish()
    }
}
