use crate::handlers::{
    default_handler, get_json_handler, get_xml_handler, health_handler, query_as_unknown_path,
    store_json_handler, store_xml_handler,
};
use crate::routes;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the router for the fixed route table.
///
/// Unsupported methods on a known path fall through to the default handler
/// instead of producing 405, and unknown paths do the same instead of 404.
/// A request-target with a query string never matches a known path.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler).fallback(default_handler))
        .route(
            routes::JSON,
            get(get_json_handler)
                .post(store_json_handler)
                .fallback(default_handler),
        )
        .route(
            routes::XML,
            get(get_xml_handler)
                .post(store_xml_handler)
                .fallback(default_handler),
        )
        .fallback(default_handler)
        .layer(middleware::from_fn_with_state(state.clone(), query_as_unknown_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `state` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
