use crate::models::ResponseTemplates;
use crate::routes;
use crate::storage::Storage;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub templates: Arc<ResponseTemplates>,
}

impl AppState {
    pub fn new(storage: Storage) -> serde_json::Result<Self> {
        Ok(AppState {
            storage: Arc::new(storage),
            templates: Arc::new(ResponseTemplates::new(&routes::KNOWN)?),
        })
    }
}
