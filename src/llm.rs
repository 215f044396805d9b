//! DeepSeek chat client for headline scoring.
//!
//! Sends an OpenAI-compatible chat completion with deterministic decoding
//! (`temperature: 0.0`) and a JSON-object response-format constraint, then
//! parses the returned content strictly as a two-key verdict.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::types::{Headline, SentimentResult};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const MODEL: &str = "deepseek-chat";
const USER_AGENT: &str = "ticker-sentiment/0.1";

const SYSTEM_PROMPT: &str = "You are a Hedge Fund Risk Manager. Analyze these headlines for a specific asset.\nOutput strictly valid JSON: {\"sentiment_score\": float (-1.0 to 1.0), \"reason\": \"brief string\"}";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// The model's two-key answer. Missing keys take the same defaults the
/// prompt's consumers rely on: a neutral score and a placeholder reason.
#[derive(Debug, Deserialize)]
struct Verdict {
    #[serde(default)]
    sentiment_score: f64,
    #[serde(default = "default_reason")]
    reason: String,
}

fn default_reason() -> String {
    "No reason provided".to_string()
}

/// Client for the DeepSeek chat-completions API.
///
/// Constructed once per pipeline and shared across invocations; the
/// underlying `reqwest::Client` is safe for concurrent use.
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl LlmClient {
    /// Creates a new client pointed at the production DeepSeek API.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
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
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        let endpoint = Url::parse(&format!(
            "{}/chat/completions",
            base_url.trim_end_matches('/')
        ))
        .map_err(|e| SentimentError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Score a batch of headlines for a ticker.
    ///
    /// The headlines are rendered as a newline-delimited bulleted block in
    /// the user message; the system message fixes the risk-manager persona
    /// and the strict JSON output contract. The parsed score is clamped to
    /// `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Http`] on network failure, timeout, or non-2xx
    ///   status.
    /// - [`SentimentError::Api`] if the completion carries no message
    ///   content.
    /// - [`SentimentError::Deserialize`] if the response envelope or the
    ///   verdict text is not the expected JSON.
    pub async fn score(
        &self,
        ticker: &str,
        headlines: &[Headline],
    ) -> Result<SentimentResult, SentimentError> {
        let news_text = headlines
            .iter()
            .map(|headline| format!("- {headline}"))
            .collect::<Vec<_>>()
            .join("\n");
        let user_prompt = format!("Asset: {ticker}\nNews:\n{news_text}");

        let request = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("chat completion for {ticker}"),
                source: e,
            })?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                SentimentError::Api("chat completion contained no message content".to_string())
            })?;

        parse_verdict(&content)
    }
}

/// Parse the model's content string into a [`SentimentResult`].
///
/// The content must be a bare JSON object; anything else is a
/// [`SentimentError::Deserialize`]. The score is clamped to `[-1.0, 1.0]`
/// since the prompt promises that range to downstream consumers.
fn parse_verdict(content: &str) -> Result<SentimentResult, SentimentError> {
    let verdict: Verdict =
        serde_json::from_str(content).map_err(|e| SentimentError::Deserialize {
            context: "chat completion content".to_string(),
            source: e,
        })?;

    Ok(SentimentResult {
        score: verdict.sentiment_score.clamp(-1.0, 1.0),
        reason: verdict.reason,
    })
}
