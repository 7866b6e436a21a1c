use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(min_length = 1)]
    pub id_token: String,
}
