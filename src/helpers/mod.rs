pub mod jwt;

pub use jwt::{extract_bearer_token, Claims, TokenError, TokenSigner};
