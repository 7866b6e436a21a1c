use super::types::{GeocodeResponse, PlacesResponse};
use super::{Coordinates, MappingConnector, NearbyQuery, ProviderPlace};
use crate::connectors::config::MappingConfig;
use crate::connectors::errors::ConnectorError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

/// Geoapify geocoding + places API client
pub struct GeoapifyClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeoapifyClient {
    pub fn new(config: MappingConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            http_client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        span: tracing::Span,
    ) -> Result<T, ConnectorError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .instrument(span)
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ConnectorError::from_status(status, text));
        }

        serde_json::from_str::<T>(&text).map_err(|e| ConnectorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MappingConnector for GeoapifyClient {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, ConnectorError> {
        let span = tracing::info_span!("mapping_geocode", query = %query);
        let params = [
            ("text", query.to_string()),
            ("limit", "1".to_string()),
            ("format", "json".to_string()),
        ];

        let body: GeocodeResponse = self.get_json("/v1/geocode/search", &params, span).await?;
        Ok(body.results.into_iter().next().map(|r| Coordinates {
            latitude: r.lat,
            longitude: r.lon,
        }))
    }

    async fn nearby(&self, query: &NearbyQuery<'_>) -> Result<Vec<ProviderPlace>, ConnectorError> {
        let span = tracing::info_span!(
            "mapping_nearby",
            lat = query.origin.latitude,
            lon = query.origin.longitude
        );
        let (lat, lon) = (query.origin.latitude, query.origin.longitude);
        let params = [
            ("categories", query.categories.join(",")),
            ("filter", format!("circle:{},{},{}", lon, lat, query.radius_m)),
            ("bias", format!("proximity:{},{}", lon, lat)),
            ("limit", query.limit.to_string()),
        ];

        let body: PlacesResponse = self.get_json("/v2/places", &params, span).await?;
        Ok(body
            .features
            .into_iter()
            .filter_map(|feature| feature.properties.into_place())
            .collect())
    }
}
