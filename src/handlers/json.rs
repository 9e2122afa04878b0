use super::{read_declared_body, respond, APPLICATION_JSON};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::HeaderMap,
    response::Response,
};

/// GET /json handler - Return the stored JSON body verbatim
///
/// Whatever was last uploaded is echoed back, valid JSON or not.
#[utoipa::path(
    get,
    path = routes::JSON,
    responses(
        (status = 200, description = "Current JSON body", body = String, content_type = "application/json")
    ),
    tag = "json"
)]
pub async fn get_json_handler(State(state): State<AppState>) -> Response {
    respond(APPLICATION_JSON, state.storage.read_json())
}

/// POST /json handler - Replace the stored JSON body
///
/// The body is stored only when the request declares a `Content-Length`.
/// The acknowledgement is returned either way.
#[utoipa::path(
    post,
    path = routes::JSON,
    request_body(content = String, description = "Arbitrary bytes, stored as-is", content_type = "application/json"),
    responses(
        (status = 200, description = "Upload acknowledged", body = MessageResponse, content_type = "application/json")
    ),
    tag = "json"
)]
pub async fn store_json_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    if let Some(data) = read_declared_body(&headers, body).await {
        tracing::info!("Stored {} bytes of JSON", data.len());
        state.storage.write_json(data);
    }

    respond(APPLICATION_JSON, state.templates.acknowledgement.clone())
}
