pub mod default;
pub mod health;
pub mod json;
pub mod xml;

pub use default::{default_handler, query_as_unknown_path};
pub use health::health_handler;
pub use json::{get_json_handler, store_json_handler};
pub use xml::{get_xml_handler, store_xml_handler};

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain";

/// 200 response carrying `body` verbatim under `content_type`
pub fn respond(content_type: &'static str, body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

/// Collect an upload body, but only keep it when the client declared its length.
///
/// The body is always drained so the connection stays usable. Returns `None`
/// when there is no `Content-Length` header or the body could not be read;
/// callers leave storage untouched in that case.
pub async fn read_declared_body(headers: &HeaderMap, body: Body) -> Option<Bytes> {
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read upload body: {}", e);
            return None;
        }
    };

    if !headers.contains_key(header::CONTENT_LENGTH) {
        tracing::debug!("Upload without Content-Length, storage left unchanged");
        return None;
    }

    Some(bytes)
}
