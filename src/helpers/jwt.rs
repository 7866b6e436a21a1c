//! Locally issued HS256 access tokens.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("token signature mismatch")]
    BadSignature,
    #[error("token expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            _ => Self::Malformed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            ttl_secs,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let iat = chrono::Utc::now().timestamp();
        self.issue_claims(&Claims {
            user_id: user.id,
            email: user.email.clone(),
            iat,
            exp: iat + self.ttl_secs,
        })
    }

    pub fn issue_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| TokenError::Signing(err.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Invalid Authorization header format".to_string());
    }
    if parts[0] != "Bearer" {
        return Err("Expected Bearer scheme in Authorization header".to_string());
    }
    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("ana@example.com".to_string(), "Ana".to_string(), None)
    }

    #[test]
    fn issued_token_verifies() {
        let signer = TokenSigner::new("secret", 7 * 24 * 60 * 60);
        let user = user();
        let claims = signer.verify(&signer.issue(&user).unwrap()).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = TokenSigner::new("secret", 60).issue(&user()).unwrap();
        let err = TokenSigner::new("other", 60).verify(&token).unwrap_err();
        assert_eq!(err, TokenError::BadSignature);
    }

    #[test]
    fn expired_token_is_rejected() {
        let signer = TokenSigner::new("secret", 60);
        let now = chrono::Utc::now().timestamp();
        let token = signer
            .issue_claims(&Claims {
                user_id: Uuid::new_v4(),
                email: "ana@example.com".to_string(),
                iat: now - 120,
                exp: now - 60,
            })
            .unwrap();
        assert_eq!(signer.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signer = TokenSigner::new("secret", 60);
        let token = signer.issue(&user()).unwrap();
        let forged = signer
            .issue_claims(&Claims {
                user_id: Uuid::new_v4(),
                email: "mallory@example.com".to_string(),
                iat: 0,
                exp: i64::MAX,
            })
            .unwrap();

        // genuine header and signature around someone else's payload
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let token = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(signer.verify(&token).unwrap_err(), TokenError::BadSignature);
        assert!(matches!(
            signer.verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn other_algorithms_are_rejected() {
        let signer = TokenSigner::new("secret", 60);
        let now = chrono::Utc::now().timestamp();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &Claims {
                user_id: Uuid::new_v4(),
                email: "ana@example.com".to_string(),
                iat: now,
                exp: now + 60,
            },
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(signer.verify(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
    }
}
