use crate::errors::ApiError;
use crate::models;
use crate::services;
use crate::store::ChatStore;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// GET /api/chat/list
/// The caller's sessions, newest first.
#[tracing::instrument(name = "List chats.", skip_all, fields(user_id = %user.id))]
#[get("/list")]
pub async fn list_handler(
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<HttpResponse, ApiError> {
    let sessions = services::chat::list(store.get_ref().as_ref(), &user).await?;
    Ok(HttpResponse::Ok().json(sessions))
}
