use crate::errors::ApiError;
use crate::models;
use crate::services;
use crate::store::ChatStore;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// GET /api/chat/history/{chat_id}
#[tracing::instrument(name = "Get chat history.", skip_all, fields(user_id = %user.id))]
#[get("/history/{chat_id}")]
pub async fn history_handler(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<HttpResponse, ApiError> {
    let chat_id = path.0.as_str();
    let history = services::chat::history(store.get_ref().as_ref(), &user, chat_id).await?;
    Ok(HttpResponse::Ok().json(history))
}
