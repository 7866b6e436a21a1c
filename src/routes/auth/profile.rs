use crate::errors::ApiError;
use crate::models;
use crate::views;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// GET /api/profile
#[tracing::instrument(name = "Get profile.", skip_all, fields(user_id = %user.id))]
#[get("")]
pub async fn profile_handler(user: web::ReqData<Arc<models::User>>) -> Result<HttpResponse, ApiError> {
    let user: &models::User = &user;
    Ok(HttpResponse::Ok().json(views::account::Profile::from(user)))
}
