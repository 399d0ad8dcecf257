use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

mod config;
mod leagues;
mod predict;
mod server;

use config::Config;
use predict::PredictionResolver;
use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    if config.use_mock {
        info!("🟡 MOCK mode – predictions scored by the local formula");
    } else {
        info!(
            "🔵 REMOTE mode – predictions fetched from {}",
            config.scoring_api_url
        );
    }

    let resolver = PredictionResolver::new(
        &config.scoring_api_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    info!(
        "Serving {} league(s), {} teams total",
        leagues::LEAGUES.len(),
        leagues::LEAGUES.iter().map(|l| l.teams.len()).sum::<usize>()
    );

    let state = AppState {
        resolver,
        use_mock: config.use_mock,
        scoring_api_url: config.scoring_api_url.clone(),
    };
    let app = server::router(state);
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Predictor listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
