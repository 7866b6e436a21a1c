use super::{Coordinates, MappingConnector, NearbyQuery, ProviderPlace};
use crate::connectors::errors::ConnectorError;

/// Static mapping provider for tests
#[derive(Default)]
pub struct MockMappingConnector {
    pub geocode_result: Option<Coordinates>,
    pub places: Vec<ProviderPlace>,
}

#[async_trait::async_trait]
impl MappingConnector for MockMappingConnector {
    async fn geocode(&self, _query: &str) -> Result<Option<Coordinates>, ConnectorError> {
        Ok(self.geocode_result)
    }

    async fn nearby(&self, _query: &NearbyQuery<'_>) -> Result<Vec<ProviderPlace>, ConnectorError> {
        Ok(self.places.clone())
    }
}
