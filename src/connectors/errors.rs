use std::fmt;

/// Errors that can occur during external service communication
#[derive(Debug)]
pub enum ConnectorError {
    /// Non-success HTTP status from the service
    HttpError(String),
    /// Service unreachable (connection refused, DNS, reset)
    ServiceUnavailable(String),
    /// The configured request timeout elapsed
    Timeout(String),
    /// Response body could not be decoded into the expected shape
    InvalidResponse(String),
    /// Credential rejected by the service (401/403)
    Unauthorized(String),
    /// Not found (404)
    NotFound(String),
    /// Rate limited or exceeded quota
    RateLimited(String),
    /// Internal error in connector
    Internal(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl ConnectorError {
    /// Classify a non-success response status.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Unauthorized(format!("{}: {}", status, body)),
            404 => Self::NotFound(format!("{}: {}", status, body)),
            429 => Self::RateLimited(format!("{}: {}", status, body)),
            _ => Self::HttpError(format!("{}: {}", status, body)),
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status, err.to_string())
        } else {
            Self::ServiceUnavailable(err.to_string())
        }
    }
}
