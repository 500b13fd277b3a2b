pub mod client;
pub mod game;

pub use client::DeckClient;
pub use game::{GameEngine, MAX_GUESS};
pub use queenspot_types::{Card, Outcome};

use thiserror::Error;

/// Error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("failed: {0}")]
    Failed(reqwest::StatusCode),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("deck service rejected the request")]
    Rejected,
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid guess: {guess} (expected 1 to {max})")]
    InvalidGuess { guess: u32, max: u32 },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
