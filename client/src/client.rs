use crate::{Error, Result};
use queenspot_types::{Card, DrawResponse, NewDeckResponse};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Bound on how long any single deck-service request may take.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the remote deck service.
///
/// The service base URL is an explicit field of the client; nothing is read
/// from ambient process state.
pub struct DeckClient {
    base_url: String,
    client: reqwest::Client,
}

impl DeckClient {
    /// Create a client against the given service base URL, e.g.
    /// `https://deckofcardsapi.com/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Like [`DeckClient::new`] with an explicit per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a freshly shuffled single deck and return its identifier.
    pub async fn new_shuffled_deck(&self) -> Result<String> {
        let url = format!("{}/deck/new/shuffle/?deck_count=1", self.base_url);
        let resp: NewDeckResponse = self.get_json(&url).await?;
        if !resp.success {
            return Err(Error::Rejected);
        }
        debug!(deck_id = %resp.deck_id, remaining = resp.remaining, "created shuffled deck");
        Ok(resp.deck_id)
    }

    /// Draw up to `count` cards from a deck, returning them in draw order
    /// along with the service's remaining-card count.
    ///
    /// The service returns fewer cards than requested once the deck runs
    /// low; that is surfaced as a shorter sequence, not an error.
    pub async fn draw(&self, deck_id: &str, count: u32) -> Result<(Vec<Card>, u32)> {
        let url = format!("{}/deck/{deck_id}/draw/?count={count}", self.base_url);
        let resp: DrawResponse = self.get_json(&url).await?;
        if !resp.success {
            return Err(Error::Rejected);
        }
        debug!(
            deck_id,
            drawn = resp.cards.len(),
            remaining = resp.remaining,
            "drew cards"
        );
        Ok((resp.cards, resp.remaining))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "deck service request");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Failed(status));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
