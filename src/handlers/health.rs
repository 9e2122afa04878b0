use super::{respond, APPLICATION_JSON};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Response};

/// GET /health handler - Health check endpoint
///
/// The fixture has no dependencies to probe, so this always reports healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Server is up", body = MessageResponse, content_type = "application/json")
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Response {
    tracing::debug!("Health check passed");
    respond(APPLICATION_JSON, state.templates.health.clone())
}
