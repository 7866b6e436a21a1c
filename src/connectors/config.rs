use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

/// Hosted chat-completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Base URL, `/v1/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer key (from env: HF_API_KEY)
    #[serde(skip)]
    pub api_key: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co".to_string(),
            model: "meta-llama/Meta-Llama-3-8B-Instruct".to_string(),
            max_tokens: 1500,
            temperature: 0.6,
            timeout_secs: 30,
            api_key: String::new(),
        }
    }
}

/// Google ID token verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub tokeninfo_url: String,
    pub timeout_secs: u64,
    /// Expected audience (from env: GOOGLE_CLIENT_ID)
    #[serde(skip)]
    pub client_id: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            tokeninfo_url: "https://oauth2.googleapis.com/tokeninfo".to_string(),
            timeout_secs: 10,
            client_id: String::new(),
        }
    }
}

/// Geocoding and places provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// from env: GEOAPIFY_API_KEY
    #[serde(skip)]
    pub api_key: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.geoapify.com".to_string(),
            timeout_secs: 10,
            api_key: String::new(),
        }
    }
}

/// Encyclopedia thumbnails with a stock-photo fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub encyclopedia_url: String,
    pub stock_photo_url: String,
    pub timeout_secs: u64,
    /// Stock-photo key (from env: PEXELS_API_KEY)
    #[serde(skip)]
    pub api_key: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            encyclopedia_url: "https://en.wikipedia.org".to_string(),
            stock_photo_url: "https://api.pexels.com".to_string(),
            timeout_secs: 10,
            api_key: String::new(),
        }
    }
}
