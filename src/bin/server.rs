//! mood-discovery HTTP server binary.
//!
//! Starts an axum HTTP server that runs mood discovery sessions for a front
//! end: word association, drawing mood, story completion and color choice,
//! then the predicted mood with a coping suggestion.
//!
//! # Environment Variables
//!
//! - `MOOD_CONFIG` — YAML configuration file (optional)
//! - `HOST` / `PORT` — bind address overrides (default: 0.0.0.0:8080)
//! - `RUST_LOG` — Tracing filter (default: "info,mood_discovery=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or with a config file:
//! MOOD_CONFIG=mood.yaml cargo run --bin server
//! ```

use anyhow::Context;
use mood_discovery::config::MoodConfig;
use mood_discovery::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mood_discovery=debug".into()),
        )
        .init();

    let config = MoodConfig::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr();

    let analyzer = config.build_analyzer();
    tracing::info!("Polarity lexicon loaded with {} words", analyzer.len());
    let state = AppState::with_parts(analyzer, config.build_catalog());

    let app = app_router(state);

    tracing::info!("mood-discovery server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                — liveness probe");
    tracing::info!("  GET  /catalog               — activity choices");
    tracing::info!("  POST /sessions              — start a session");
    tracing::info!("  POST /sessions/:id/predict  — reveal the predicted mood");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
