pub mod auth;
pub mod chat;
pub mod places;

pub use auth::LoginForm;
pub use chat::MessageForm;
pub use places::{GeocodeForm, NearbyForm};

use crate::errors::ApiError;
use serde_valid::Validate;

/// Run the form's `serde_valid` rules, turning failures into a validation error.
pub fn validate<T: Validate>(form: &T) -> Result<(), ApiError> {
    form.validate().map_err(|errors| {
        let msg = format!("Invalid data received {}", errors);
        tracing::debug!(msg);
        ApiError::Validation(msg)
    })
}
