use std::fmt;

/// A single news item collected for one pipeline invocation.
///
/// Exists only for the duration of a call; the `Display` rendering is the
/// exact line handed to the model.
#[derive(Debug, Clone)]
pub struct Headline {
    /// Article title. Providers that omit it contribute `"Untitled"`.
    pub title: String,
    /// Provider-specific metadata appended to the rendered line.
    pub annotation: Annotation,
}

/// Provider-supplied metadata attached to a headline.
#[derive(Debug, Clone)]
pub enum Annotation {
    /// Entity-level sentiment score from the finance-news provider.
    /// `None` renders as `N/A`.
    EntitySentiment(Option<f64>),
    /// Publisher identifier from the general-news provider.
    /// `None` renders as `unknown source`.
    Source(Option<String>),
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.annotation {
            Annotation::EntitySentiment(Some(score)) => {
                write!(f, "{} (Sentiment: {score})", self.title)
            }
            Annotation::EntitySentiment(None) => write!(f, "{} (Sentiment: N/A)", self.title),
            Annotation::Source(Some(source)) => write!(f, "{} (Source: {source})", self.title),
            Annotation::Source(None) => write!(f, "{} (Source: unknown source)", self.title),
        }
    }
}

/// Final sentiment verdict for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    /// Model score in `[-1.0, 1.0]`. `0.0` on every degraded path.
    pub score: f64,
    /// Short human-readable rationale, or a fixed degradation message.
    pub reason: String,
}

impl SentimentResult {
    pub(crate) fn neutral(reason: &str) -> Self {
        Self {
            score: 0.0,
            reason: reason.to_string(),
        }
    }
}
