use crate::connectors::{ConnectorError, IdentityConnector, IdentityProfile};
use crate::errors::ApiError;
use crate::helpers::TokenSigner;
use crate::models::User;
use crate::store::{ChatStore, StoreError};
use crate::views::account::AccessToken;

/// Exchange a provider identity token for a locally signed access token,
/// creating the user on first sign-in.
#[tracing::instrument(name = "Google login", skip_all)]
pub async fn login(
    store: &dyn ChatStore,
    identity: &dyn IdentityConnector,
    signer: &TokenSigner,
    id_token: &str,
) -> Result<AccessToken, ApiError> {
    let profile = identity
        .verify_id_token(id_token)
        .await
        .map_err(|err| match err {
            ConnectorError::Unauthorized(reason) => {
                tracing::warn!("Identity token rejected: {}", reason);
                ApiError::Unauthorized("Invalid Google token".to_string())
            }
            err => err.into(),
        })?;

    let user = find_or_create(store, profile).await?;
    tracing::info!(user_id = %user.id, "User signed in");

    Ok(AccessToken {
        access: signer.issue(&user)?,
    })
}

async fn find_or_create(store: &dyn ChatStore, profile: IdentityProfile) -> Result<User, ApiError> {
    if let Some(user) = store.find_user_by_email(&profile.email).await? {
        return Ok(user);
    }

    let name = profile
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| profile.email.clone());
    let user = User::new(profile.email.clone(), name, profile.picture);

    match store.insert_user(user).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Created user");
            Ok(user)
        }
        // a concurrent first login won the insert
        Err(StoreError::Conflict(_)) => store
            .find_user_by_email(&profile.email)
            .await?
            .ok_or_else(|| ApiError::Internal("User vanished after conflict".to_string())),
        Err(err) => Err(err.into()),
    }
}
