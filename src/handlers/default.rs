use super::{respond, APPLICATION_JSON};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};

/// Fallback handler for unknown paths and unsupported methods
///
/// Answers 200 with a help message listing the known routes.
pub async fn default_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    tracing::debug!("No route for {} {}, sending default response", method, uri);
    respond(APPLICATION_JSON, state.templates.default.clone())
}

/// Known paths match only as the whole request-target, so a query string
/// (even an empty one) turns `/json?x=1` into an unknown path.
pub async fn query_as_unknown_path(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().query().is_some() {
        let method = request.method().clone();
        let uri = request.uri().clone();
        return default_handler(State(state), method, uri).await;
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::send;
    use crate::storage::Storage;
    use axum::{http::StatusCode, Router};

    fn setup_test_app() -> (AppState, Router) {
        let state = AppState::new(Storage::default()).unwrap();
        let app = Router::new()
            .fallback(default_handler)
            .with_state(state.clone());
        (state, app)
    }

    #[tokio::test]
    async fn test_default_get() {
        let (state, app) = setup_test_app();

        let response = send(&app, "GET", "/something", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.body, state.templates.default);
        for route in crate::routes::KNOWN {
            assert!(response.text().contains(route));
        }
    }

    #[tokio::test]
    async fn test_default_post_ignores_body() {
        let (state, app) = setup_test_app();

        let response = send(&app, "POST", "/something", Some("{test: some_data}")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, state.templates.default);
        assert_eq!(
            state.storage.read_json(),
            crate::storage::INIT_JSON_DATA.as_bytes()
        );
    }
}
