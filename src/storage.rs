use arc_swap::ArcSwap;
use axum::body::Bytes;
use std::sync::Arc;

/// Seed value served from `/json` until the first upload
pub const INIT_JSON_DATA: &str =
    r#"{"status": true, "data": {"id": "FEFE", "some_field": "some_field_data"}}"#;

/// Seed value served from `/xml` until the first upload
pub const INIT_XML_DATA: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    "<status>True</status>",
    "<data>",
    "<id>FEFE</id>",
    "<some_field>some_field_data</some_field>",
    "</data>",
);

/// In-memory holder of the current JSON and XML payloads
///
/// Both fields are opaque bytes: nothing is parsed or validated. Each field is
/// swapped atomically, so a reader sees either the previous or the new value
/// in full. The two fields are independent of each other.
pub struct Storage {
    json: ArcSwap<Bytes>,
    xml: ArcSwap<Bytes>,
}

impl Storage {
    pub fn new(json: impl Into<Bytes>, xml: impl Into<Bytes>) -> Self {
        Storage {
            json: ArcSwap::from_pointee(json.into()),
            xml: ArcSwap::from_pointee(xml.into()),
        }
    }

    pub fn read_json(&self) -> Bytes {
        Bytes::clone(&self.json.load())
    }

    pub fn write_json(&self, data: Bytes) {
        tracing::debug!(bytes = data.len(), "Storing JSON body");
        self.json.store(Arc::new(data));
    }

    pub fn read_xml(&self) -> Bytes {
        Bytes::clone(&self.xml.load())
    }

    pub fn write_xml(&self, data: Bytes) {
        tracing::debug!(bytes = data.len(), "Storing XML body");
        self.xml.store(Arc::new(data));
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::new(INIT_JSON_DATA, INIT_XML_DATA)
    }
}
