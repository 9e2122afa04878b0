mod api_doc;
mod config;
mod handlers;
mod models;
mod routes;
mod server;
mod state;
mod storage;

use anyhow::Context;
use clap::Parser;
use config::Config;
use state::AppState;
use storage::Storage;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::parse();

    if config.openapi {
        let doc = api_doc::ApiDoc::openapi()
            .to_pretty_json()
            .context("Failed to render OpenAPI document")?;
        println!("{}", doc);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mock_http_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("mock-http-server starting");
    config.log_startup();

    let state = AppState::new(Storage::default()).context("Failed to render response templates")?;

    let listener = TcpListener::bind((config.listen.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    tracing::info!("Starting server on {}", config.bind_address());
    server::serve(listener, state, server::shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}
