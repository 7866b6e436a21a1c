//! Representative imagery: encyclopedia thumbnails and stock photos.

mod client;
pub mod mock;

pub use client::ImageClient;

use crate::connectors::errors::ConnectorError;

#[async_trait::async_trait]
pub trait ImageConnector: Send + Sync {
    /// Thumbnail of the encyclopedia article titled `title`, if there is one.
    async fn encyclopedia_thumbnail(&self, title: &str) -> Result<Option<String>, ConnectorError>;

    /// First stock photo matching `query`.
    async fn stock_photo(&self, query: &str) -> Result<Option<String>, ConnectorError>;
}
