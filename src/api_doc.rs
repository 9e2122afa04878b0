use utoipa::OpenApi;

use crate::handlers;
use crate::models::MessageResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "mock-http-server API",
        version = "0.1.0",
        description = "HTTP fixture serving runtime-replaceable JSON and XML payloads. \
                       Any other path or method returns a default message with status 200."
    ),
    paths(
        handlers::health::health_handler,
        handlers::json::get_json_handler,
        handlers::json::store_json_handler,
        handlers::xml::get_xml_handler,
        handlers::xml::store_xml_handler
    ),
    components(schemas(MessageResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "json", description = "Stored JSON payload"),
        (name = "xml", description = "Stored XML payload")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_documents_every_known_route() {
        let doc = ApiDoc::openapi();
        for route in routes::KNOWN {
            assert!(doc.paths.paths.contains_key(route), "missing {}", route);
        }
    }

    #[test]
    fn test_upload_routes_document_post() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths[routes::JSON].post.is_some());
        assert!(doc.paths.paths[routes::XML].post.is_some());
        assert!(doc.paths.paths[routes::HEALTH].post.is_none());
    }

    #[test]
    fn test_renders_as_json() {
        let rendered = ApiDoc::openapi().to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["info"]["title"], "mock-http-server API");
    }
}
