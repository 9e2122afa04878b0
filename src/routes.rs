// Route path constants - single source of truth for all known paths

pub const HEALTH: &str = "/health";
pub const JSON: &str = "/json";
pub const XML: &str = "/xml";

/// Known paths in the order they are advertised by the default response
pub const KNOWN: [&str; 3] = [HEALTH, JSON, XML];

/// Render a route list as `['/health', '/json', '/xml']`
pub fn format_route_list(routes: &[&str]) -> String {
    let quoted: Vec<String> = routes.iter().map(|route| format!("'{}'", route)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes_list() {
        assert_eq!(format_route_list(&KNOWN), "['/health', '/json', '/xml']");
    }

    #[test]
    fn test_empty_route_list() {
        assert_eq!(format_route_list(&[]), "[]");
    }
}
