use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub connectors: ConnectorConfig,
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Lifetime of issued access tokens
    pub token_ttl_secs: i64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_ttl_secs: 7 * 24 * 60 * 60,
        }
    }
}

/// Secrets, only ever read from the process environment.
#[derive(Clone, Default)]
pub struct Credentials {
    pub completion_api_key: String,
    pub google_client_id: String,
    pub secret_key: String,
    pub mapping_api_key: String,
    pub stock_photo_api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("google_client_id", &self.google_client_id)
            .finish_non_exhaustive()
    }
}

fn required_env(name: &str) -> Result<String, config::ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| config::ConfigError::NotFound(name.to_string()))
}

impl Credentials {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Ok(Credentials {
            completion_api_key: required_env("HF_API_KEY")?,
            google_client_id: required_env("GOOGLE_CLIENT_ID")?,
            secret_key: required_env("SECRET_KEY")?,
            mapping_api_key: required_env("GEOAPIFY_API_KEY")?,
            stock_photo_api_key: required_env("PEXELS_API_KEY")?,
        })
    }
}

impl Settings {
    /// Hand each connector the secret it authenticates with.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.connectors.completion.api_key = credentials.completion_api_key.clone();
        self.connectors.identity.client_id = credentials.google_client_id.clone();
        self.connectors.mapping.api_key = credentials.mapping_api_key.clone();
        self.connectors.images.api_key = credentials.stock_photo_api_key.clone();
        self.credentials = credentials;
        self
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

/// File and `VOYAGE__*` environment overlay, without the secrets.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("VOYAGE")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = load_settings()?;
    Ok(settings.with_credentials(Credentials::from_env()?))
}
