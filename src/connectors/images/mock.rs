use super::ImageConnector;
use crate::connectors::errors::ConnectorError;
use std::collections::HashMap;

/// Serves thumbnails and stock photos from fixed maps. A `None` map makes
/// that lookup fail with an upstream error.
#[derive(Default)]
pub struct MockImageConnector {
    pub thumbnails: Option<HashMap<String, String>>,
    pub stock_photos: Option<HashMap<String, String>>,
}

#[async_trait::async_trait]
impl ImageConnector for MockImageConnector {
    async fn encyclopedia_thumbnail(&self, title: &str) -> Result<Option<String>, ConnectorError> {
        self.thumbnails
            .as_ref()
            .map(|m| m.get(title).cloned())
            .ok_or_else(|| ConnectorError::ServiceUnavailable("encyclopedia down".to_string()))
    }

    async fn stock_photo(&self, query: &str) -> Result<Option<String>, ConnectorError> {
        self.stock_photos
            .as_ref()
            .map(|m| m.get(query).cloned())
            .ok_or_else(|| ConnectorError::ServiceUnavailable("stock photos down".to_string()))
    }
}
