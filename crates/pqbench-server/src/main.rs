//! PQBench API server binary

use clap::Parser;
use pqbench_server::{router, seed, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pqbench-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "PQBench - Post-Quantum Cryptography Benchmark Leaderboard", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "PQBENCH_BIND", default_value = "0.0.0.0:3002")]
    bind: String,

    /// Load the demo dataset at startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("╔══════════════════════════════════════════════════════════════╗");
    tracing::info!("║                      PQBENCH API                             ║");
    tracing::info!("║      Post-Quantum Cryptography Benchmark Leaderboard         ║");
    tracing::info!("╚══════════════════════════════════════════════════════════════╝");

    let state = Arc::new(AppState::new());

    if cli.seed {
        seed::load_demo_data(&state.db)?;
    }

    let app = router(state);

    tracing::info!("PQBench API listening on {}", cli.bind);
    tracing::info!("API docs: http://{}/api/v1/status", cli.bind);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
