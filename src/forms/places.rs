use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct NearbyForm {
    #[validate(minimum = -90.0)]
    #[validate(maximum = 90.0)]
    pub latitude: f64,
    #[validate(minimum = -180.0)]
    #[validate(maximum = 180.0)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeocodeForm {
    #[validate(min_length = 1)]
    pub query: String,
}
