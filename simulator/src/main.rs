use anyhow::Result;
use clap::Parser;
use queenspot_simulator::{Api, Simulator};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Standalone deck service speaking the public API's wire format.
#[derive(Parser, Debug)]
#[command(name = "queenspot-simulator", about = "Local deck service for queenspot")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let simulator = Arc::new(Simulator::new());
    let api = Api::new(simulator);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!(addr = %args.listen, "deck service listening");
    axum::serve(listener, api.router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listen_address() {
        let args = Args::parse_from(["simulator", "--listen", "0.0.0.0:9000"]);
        assert_eq!(args.listen.port(), 9000);
    }

    #[test]
    fn defaults_to_loopback() {
        let args = Args::parse_from(["simulator"]);
        assert!(args.listen.ip().is_loopback());
        assert_eq!(args.listen.port(), 8080);
    }
}
