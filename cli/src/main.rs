use anyhow::{Context, Result};
use clap::Parser;
use queenspot_client::{DeckClient, GameEngine, MAX_GUESS};
use std::env;
use std::io::Write;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api";

/// Draw cards from a shuffled deck and guess which draw uncovers the queen.
#[derive(Parser, Debug)]
#[command(name = "queenspot", about = "Guess which card the queen hides behind")]
struct Args {
    /// How many cards to draw; also your guess for the queen's position
    /// (1 to 52).
    guess: u32,

    /// Deck service base URL. Falls back to the BASE_URL environment
    /// variable, then to the public service.
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn base_url(flag: Option<String>) -> String {
    flag.or_else(|| env::var("BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();
    let args = Args::parse();

    let base = base_url(args.base_url);
    let client = DeckClient::with_timeout(&base, Duration::from_secs(args.timeout))
        .with_context(|| format!("invalid deck service URL: {base}"))?;
    let engine = GameEngine::new(client);

    let outcome = engine
        .play(args.guess)
        .await
        .context("round could not be completed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    outcome.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}
