use crate::{DeckClient, Error, Result};
use queenspot_types::{evaluate, Outcome};
use tracing::info;

/// Largest accepted guess: one standard deck.
pub const MAX_GUESS: u32 = 52;

/// Runs rounds of the guessing game against a remote deck.
///
/// Each round is self-contained: a fresh deck is created and consumed
/// within one [`GameEngine::play`] call, so sequential rounds cannot
/// interfere with each other.
pub struct GameEngine {
    client: DeckClient,
}

impl GameEngine {
    pub fn new(client: DeckClient) -> Self {
        Self { client }
    }

    /// Play a single round: shuffle a fresh deck, draw `guess` cards, and
    /// win if the first queen sits exactly at position `guess`.
    ///
    /// Exactly one deck-creation and one draw request are issued per call,
    /// with no retries. Any transport or decode failure aborts the round
    /// and propagates unmodified; no partial outcome is produced.
    pub async fn play(&self, guess: u32) -> Result<Outcome> {
        if guess == 0 || guess > MAX_GUESS {
            return Err(Error::InvalidGuess {
                guess,
                max: MAX_GUESS,
            });
        }

        let deck_id = self.client.new_shuffled_deck().await?;
        let (cards, remaining) = self.client.draw(&deck_id, guess).await?;

        let outcome = evaluate(&cards, guess);
        info!(
            guess,
            drawn = cards.len(),
            remaining,
            won = outcome.won,
            "round resolved"
        );
        Ok(outcome)
    }
}
