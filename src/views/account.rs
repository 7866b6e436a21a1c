use crate::models;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

impl From<&models::User> for Profile {
    fn from(user: &models::User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
        }
    }
}
