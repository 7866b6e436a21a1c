use super::ImageConnector;
use crate::connectors::config::ImageConfig;
use crate::connectors::errors::ConnectorError;
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct PhotoSearch {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    medium: String,
}

/// Wikipedia page-summary thumbnails + Pexels search
pub struct ImageClient {
    encyclopedia_url: String,
    stock_photo_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl ImageClient {
    pub fn new(config: ImageConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            encyclopedia_url: config.encyclopedia_url.trim_end_matches('/').to_string(),
            stock_photo_url: config.stock_photo_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            http_client,
        })
    }
}

#[async_trait::async_trait]
impl ImageConnector for ImageClient {
    async fn encyclopedia_thumbnail(&self, title: &str) -> Result<Option<String>, ConnectorError> {
        let span = tracing::info_span!("encyclopedia_thumbnail", title = %title);
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.encyclopedia_url,
            urlencoding::encode(&title.replace(' ', "_"))
        );

        let resp = self.http_client.get(&url).send().instrument(span).await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConnectorError::from_status(status, body));
        }

        let summary: PageSummary = resp
            .json()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;
        Ok(summary.thumbnail.map(|t| t.source))
    }

    async fn stock_photo(&self, query: &str) -> Result<Option<String>, ConnectorError> {
        let span = tracing::info_span!("stock_photo", query = %query);
        let url = format!("{}/v1/search", self.stock_photo_url);

        let resp = self
            .http_client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .instrument(span)
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConnectorError::from_status(status, body));
        }

        let search: PhotoSearch = resp
            .json()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;
        Ok(search.photos.into_iter().next().map(|p| p.src.medium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ImageClient {
        ImageClient::new(ImageConfig {
            encyclopedia_url: server.uri(),
            stock_photo_url: server.uri(),
            timeout_secs: 2,
            api_key: "pexels-key".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn thumbnail_is_looked_up_by_title() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Eiffel_Tower"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "Eiffel Tower",
                "thumbnail": {"source": "https://upload.example.org/eiffel.jpg", "width": 240}
            })))
            .mount(&server)
            .await;

        let image = client_for(&server)
            .encyclopedia_thumbnail("Eiffel Tower")
            .await
            .unwrap();
        assert_eq!(image.as_deref(), Some("https://upload.example.org/eiffel.jpg"));
    }

    #[tokio::test]
    async fn missing_article_means_no_thumbnail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let image = client_for(&server)
            .encyclopedia_thumbnail("Corner Cafe")
            .await
            .unwrap();
        assert_eq!(image, None);
    }

    #[tokio::test]
    async fn stock_photo_uses_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(header("authorization", "pexels-key"))
            .and(query_param("query", "restaurant"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "photos": [{"src": {"medium": "https://images.example.com/r.jpg"}}]
            })))
            .mount(&server)
            .await;

        let image = client_for(&server).stock_photo("restaurant").await.unwrap();
        assert_eq!(image.as_deref(), Some("https://images.example.com/r.jpg"));
    }
}
