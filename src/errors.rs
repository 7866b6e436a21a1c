use crate::connectors::ConnectorError;
use crate::helpers::jwt::TokenError;
use crate::store::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Every error a client can observe. The HTTP body always carries a stable `kind`
/// next to a human readable `message`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub kind: &'static str,
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Upstream(_) => "upstream",
            Self::Timeout(_) => "timeout",
            Self::Internal(_) => "internal",
        }
    }

    pub fn chat_not_found() -> Self {
        Self::NotFound("Chat not found".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status: "Error",
            kind: self.kind(),
            code: status.as_u16(),
            message: self.to_string(),
        })
    }
}

impl From<ConnectorError> for ApiError {
    fn from(err: ConnectorError) -> Self {
        tracing::error!("External service call failed: {}", err);
        match err {
            ConnectorError::Timeout(_) => Self::Timeout("External service timed out".to_string()),
            _ => Self::Upstream("External service error".to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store operation failed: {}", err);
        Self::Internal("Internal error".to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::Unauthorized("Token expired".to_string()),
            TokenError::Signing(reason) => {
                tracing::error!("Token signing failed: {}", reason);
                Self::Internal("Internal error".to_string())
            }
            _ => Self::Unauthorized("Invalid token".to_string()),
        }
    }
}
