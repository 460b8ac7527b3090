use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use revdash_mock_api::{router, AppState, Endpoint, Fixtures, ServeOptions};

#[derive(Parser)]
#[command(name = "revdash-mock-api", about = "Fixture-backed API for the revdash dashboard")]
struct Cli {
    /// HTTP port to listen on.
    #[arg(long, default_value_t = 4000)]
    port: u16,

    /// Directory holding wallet.json, transactions.json and user.json.
    /// Missing files fall back to the built-in fixtures.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Delay every response by this many milliseconds.
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Serve an empty transaction list.
    #[arg(long)]
    empty: bool,

    /// Respond 500 on this endpoint (repeatable).
    #[arg(long, value_enum)]
    fail: Vec<Endpoint>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let fixtures = match &cli.fixtures {
        Some(dir) => Fixtures::load(dir)?,
        None => Fixtures::builtin()?,
    };
    tracing::info!(
        "Loaded {} transactions for {}",
        fixtures.transactions.len(),
        fixtures.user.full_name()
    );

    let options = ServeOptions {
        latency: Duration::from_millis(cli.latency_ms),
        empty: cli.empty,
        failing: cli.fail.iter().copied().collect(),
    };
    if !options.failing.is_empty() {
        tracing::warn!("Failing endpoints: {:?}", options.failing);
    }

    let app = router(AppState::new(fixtures, options));

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Mock API listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
