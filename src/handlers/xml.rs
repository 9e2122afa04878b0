use super::{read_declared_body, respond, APPLICATION_JSON, TEXT_PLAIN};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::HeaderMap,
    response::Response,
};

/// GET /xml handler - Return the stored XML body verbatim
///
/// Served as `text/plain`, which existing clients assert on.
#[utoipa::path(
    get,
    path = routes::XML,
    responses(
        (status = 200, description = "Current XML body", body = String, content_type = "text/plain")
    ),
    tag = "xml"
)]
pub async fn get_xml_handler(State(state): State<AppState>) -> Response {
    respond(TEXT_PLAIN, state.storage.read_xml())
}

/// POST /xml handler - Replace the stored XML body
///
/// The acknowledgement is JSON, like every other fixed response.
#[utoipa::path(
    post,
    path = routes::XML,
    request_body(content = String, description = "Arbitrary bytes, stored as-is", content_type = "application/xml"),
    responses(
        (status = 200, description = "Upload acknowledged", body = MessageResponse, content_type = "application/json")
    ),
    tag = "xml"
)]
pub async fn store_xml_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    if let Some(data) = read_declared_body(&headers, body).await {
        tracing::info!("Stored {} bytes of XML", data.len());
        state.storage.write_xml(data);
    }

    respond(APPLICATION_JSON, state.templates.acknowledgement.clone())
}
