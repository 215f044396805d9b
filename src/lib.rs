//! News-driven ticker sentiment scoring.
//!
//! Collects recent headlines for a financial ticker from MarketAux
//! (entity-tagged finance news) and NewsData.io (general business news),
//! hands them to the DeepSeek chat API under a risk-manager persona, and
//! parses the strict-JSON reply into a bounded score plus a short
//! rationale. Provider failures are isolated from each other, and every
//! failure path degrades to a neutral result — the entry point never
//! errors.

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod sources;
pub mod types;

pub use config::SentimentConfig;
pub use error::SentimentError;
pub use llm::LlmClient;
pub use pipeline::SentimentPipeline;
pub use sources::{MarketauxClient, NewsdataClient};
pub use types::{Annotation, Headline, SentimentResult};
