//! Headline source orchestration.

mod marketaux;
mod newsdata;

pub use marketaux::MarketauxClient;
pub use newsdata::NewsdataClient;

use crate::types::Headline;

/// Collect headlines from both providers for a ticker.
///
/// Providers run in fixed order: MarketAux items always precede
/// NewsData.io items in the output. A disabled client (missing credential
/// or failed construction) or a failed fetch contributes nothing and never
/// affects the other provider. Returns an empty `Vec` if both degrade.
pub(crate) async fn collect_headlines(
    marketaux: Option<&MarketauxClient>,
    newsdata: Option<&NewsdataClient>,
    ticker: &str,
) -> Vec<Headline> {
    let mut headlines = Vec::new();

    // MarketAux (finance-entity provider)
    if let Some(client) = marketaux {
        match client.fetch(ticker).await {
            Ok(items) => {
                tracing::debug!(
                    ticker,
                    count = items.len(),
                    "collected MarketAux headlines"
                );
                headlines.extend(items);
            }
            Err(e) => {
                tracing::warn!(
                    ticker,
                    source = "marketaux",
                    error = %e,
                    "MarketAux fetch failed"
                );
            }
        }
    } else {
        tracing::debug!(ticker, source = "marketaux", "client disabled, skipping");
    }

    // NewsData.io (general business-news provider)
    if let Some(client) = newsdata {
        match client.fetch(ticker).await {
            Ok(items) => {
                tracing::debug!(
                    ticker,
                    count = items.len(),
                    "collected NewsData headlines"
                );
                headlines.extend(items);
            }
            Err(e) => {
                tracing::warn!(
                    ticker,
                    source = "newsdata",
                    error = %e,
                    "NewsData fetch failed"
                );
            }
        }
    } else {
        tracing::debug!(ticker, source = "newsdata", "client disabled, skipping");
    }

    headlines
}
