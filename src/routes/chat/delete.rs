use crate::errors::ApiError;
use crate::models;
use crate::services;
use crate::store::ChatStore;
use crate::views;
use actix_web::{delete, web, HttpResponse};
use std::sync::Arc;

/// DELETE /api/chat/delete/{chat_id}
/// Removes the session together with its messages.
#[tracing::instrument(name = "Delete chat.", skip_all, fields(user_id = %user.id))]
#[delete("/delete/{chat_id}")]
pub async fn delete_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<HttpResponse, ApiError> {
    services::chat::delete(store.get_ref().as_ref(), &user, path.0.as_str()).await?;

    Ok(HttpResponse::Ok().json(views::chat::Deleted {
        message: "Chat deleted successfully".to_string(),
    }))
}
