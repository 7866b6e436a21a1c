use crate::connectors::IdentityConnector;
use crate::errors::ApiError;
use crate::forms;
use crate::helpers::TokenSigner;
use crate::services;
use crate::store::ChatStore;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

/// POST /api/auth/google
/// Trades a Google ID token for a local access token.
#[tracing::instrument(name = "Login with Google.", skip_all)]
#[post("/google")]
pub async fn login_handler(
    form: web::Json<forms::LoginForm>,
    store: web::Data<Arc<dyn ChatStore>>,
    identity: web::Data<Arc<dyn IdentityConnector>>,
    signer: web::Data<TokenSigner>,
) -> Result<HttpResponse, ApiError> {
    forms::validate(&*form)?;

    let token = services::account::login(
        store.get_ref().as_ref(),
        identity.get_ref().as_ref(),
        signer.get_ref(),
        &form.id_token,
    )
    .await?;

    Ok(HttpResponse::Ok().json(token))
}
