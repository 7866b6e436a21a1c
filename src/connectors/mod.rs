//! External Service Connectors
//!
//! Adapters for every outbound HTTP dependency: the completion model, the identity
//! provider, the mapping provider and the image providers. Routes and services only
//! see the traits, so tests swap in the mocks or point the clients at a stub server.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}/mod.rs` → allows mocking in tests
//! 2. Implement HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs`, secrets from the environment
//! 4. Inject trait object into routes via `web::Data<Arc<dyn Trait>>`

pub mod completion;
pub mod config;
pub mod errors;
pub mod identity;
pub mod images;
pub mod mapping;

pub use completion::{CompletionClient, CompletionConnector, CompletionMessage, CompletionRole};
pub use config::{CompletionConfig, ConnectorConfig, IdentityConfig, ImageConfig, MappingConfig};
pub use errors::ConnectorError;
pub use identity::{GoogleIdentityClient, IdentityConnector, IdentityProfile};
pub use images::{ImageClient, ImageConnector};
pub use mapping::{Coordinates, GeoapifyClient, MappingConnector, NearbyQuery, ProviderPlace};

use actix_web::web;
use std::sync::Arc;

/// Every outbound connector, wrapped for injection into the Actix app.
#[derive(Clone)]
pub struct Connectors {
    pub completion: web::Data<Arc<dyn CompletionConnector>>,
    pub identity: web::Data<Arc<dyn IdentityConnector>>,
    pub mapping: web::Data<Arc<dyn MappingConnector>>,
    pub images: web::Data<Arc<dyn ImageConnector>>,
}

impl Connectors {
    pub fn new(
        completion: Arc<dyn CompletionConnector>,
        identity: Arc<dyn IdentityConnector>,
        mapping: Arc<dyn MappingConnector>,
        images: Arc<dyn ImageConnector>,
    ) -> Self {
        Self {
            completion: web::Data::new(completion),
            identity: web::Data::new(identity),
            mapping: web::Data::new(mapping),
            images: web::Data::new(images),
        }
    }
}

/// Build the HTTP clients from configuration.
///
/// # Example
/// ```ignore
/// // In startup.rs
/// let connectors = connectors::init(&settings.connectors)?;
/// App::new().app_data(connectors.completion.clone())
/// ```
pub fn init(config: &ConnectorConfig) -> Result<Connectors, ConnectorError> {
    tracing::info!(
        completion = %config.completion.base_url,
        mapping = %config.mapping.base_url,
        "Initializing external connectors"
    );

    Ok(Connectors::new(
        Arc::new(CompletionClient::new(config.completion.clone())?),
        Arc::new(GoogleIdentityClient::new(config.identity.clone())?),
        Arc::new(GeoapifyClient::new(config.mapping.clone())?),
        Arc::new(ImageClient::new(config.images.clone())?),
    ))
}
