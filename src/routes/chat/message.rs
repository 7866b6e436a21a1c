use crate::connectors::CompletionConnector;
use crate::errors::ApiError;
use crate::forms;
use crate::models;
use crate::services;
use crate::store::ChatStore;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

/// POST /api/chat/message
/// Appends a user turn, asks the model, returns its reply. Without a `chat_id`
/// a new session is opened.
#[tracing::instrument(name = "Send chat message.", skip_all, fields(user_id = %user.id))]
#[post("/message")]
pub async fn message_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::MessageForm>,
    store: web::Data<Arc<dyn ChatStore>>,
    completion: web::Data<Arc<dyn CompletionConnector>>,
) -> Result<HttpResponse, ApiError> {
    forms::validate(&*form)?;

    let reply = services::chat::send_message(
        store.get_ref().as_ref(),
        completion.get_ref().as_ref(),
        &user,
        &form.message,
        form.chat_id(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(reply))
}
