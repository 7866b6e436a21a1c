use crate::errors::ApiError;
use crate::helpers::{extract_bearer_token, TokenSigner};
use crate::middleware::authentication::get_header;
use crate::store::ChatStore;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use std::sync::Arc;

/// Returns `Ok(false)` when the request carries no Authorization header at all.
#[tracing::instrument(name = "Authenticate with access token", skip_all)]
pub async fn try_jwt(req: &mut ServiceRequest) -> Result<bool, ApiError> {
    let Some(authorization) = get_header::<String>(req, "authorization")? else {
        return Ok(false);
    };

    let token = extract_bearer_token(&authorization).map_err(ApiError::Unauthorized)?;

    let signer = req
        .app_data::<web::Data<TokenSigner>>()
        .cloned()
        .ok_or_else(|| ApiError::Internal("token signer is not configured".to_string()))?;
    let store = req
        .app_data::<web::Data<Arc<dyn ChatStore>>>()
        .cloned()
        .ok_or_else(|| ApiError::Internal("chat store is not configured".to_string()))?;

    let claims = signer.verify(token).map_err(|err| {
        tracing::warn!("Access token rejected: {}", err);
        ApiError::from(err)
    })?;

    let user = store.find_user(&claims.user_id).await?.ok_or_else(|| {
        tracing::warn!(user_id = %claims.user_id, "Token refers to an unknown user");
        ApiError::Unauthorized("User not found".to_string())
    })?;

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err(ApiError::Internal("user already logged".to_string()));
    }

    tracing::debug!(user_id = %claims.user_id, "Access token accepted");
    Ok(true)
}
