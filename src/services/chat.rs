use crate::connectors::CompletionConnector;
use crate::errors::ApiError;
use crate::models::{ChatSession, NewMessage, Role, User};
use crate::services::conversation;
use crate::store::ChatStore;
use crate::views;
use uuid::Uuid;

/// Resolve a session by id, then check who owns it. Absent, unparsable and
/// foreign sessions are reported identically.
pub async fn owned_session(
    store: &dyn ChatStore,
    user: &User,
    chat_id: &str,
) -> Result<ChatSession, ApiError> {
    let id = Uuid::parse_str(chat_id).map_err(|_| ApiError::chat_not_found())?;

    match store.find_session(&id).await? {
        Some(session) if session.is_owned_by(&user.id) => Ok(session),
        Some(_) => {
            tracing::warn!(chat_id = %id, user_id = %user.id, "Chat owned by another user");
            Err(ApiError::chat_not_found())
        }
        None => Err(ApiError::chat_not_found()),
    }
}

/// One conversational turn: store the user's text, replay the session to the
/// model, store and return the answer. A failed completion leaves only the
/// user's turn behind.
#[tracing::instrument(name = "Send chat message", skip_all, fields(user_id = %user.id))]
pub async fn send_message(
    store: &dyn ChatStore,
    completion: &dyn CompletionConnector,
    user: &User,
    text: &str,
    chat_id: Option<&str>,
) -> Result<views::chat::Reply, ApiError> {
    let session = match chat_id {
        Some(chat_id) => owned_session(store, user, chat_id).await?,
        None => {
            let session = store.insert_session(ChatSession::open(user.id, text)).await?;
            tracing::info!(chat_id = %session.id, "Created chat session");
            session
        }
    };

    store
        .insert_message(NewMessage::now(session.id, Role::User, text))
        .await?;

    let history = store.list_messages(&session.id).await?;
    let payload = conversation::assemble(&history);

    let reply = completion.complete(&payload).await?;

    store
        .insert_message(NewMessage::now(session.id, Role::Assistant, reply.clone()))
        .await?;

    Ok(views::chat::Reply {
        chat_id: session.id,
        reply,
    })
}

pub async fn list(store: &dyn ChatStore, user: &User) -> Result<Vec<views::chat::Summary>, ApiError> {
    let sessions = store.list_sessions(&user.id).await?;
    Ok(sessions.into_iter().map(Into::into).collect())
}

pub async fn history(
    store: &dyn ChatStore,
    user: &User,
    chat_id: &str,
) -> Result<views::chat::History, ApiError> {
    let session = owned_session(store, user, chat_id).await?;
    let messages = store.list_messages(&session.id).await?;

    Ok(views::chat::History {
        chat_id: session.id,
        messages: messages.into_iter().map(Into::into).collect(),
    })
}

pub async fn delete(store: &dyn ChatStore, user: &User, chat_id: &str) -> Result<(), ApiError> {
    let session = owned_session(store, user, chat_id).await?;

    if !store.delete_session(&session.id).await? {
        // removed concurrently between the lookup and the delete
        return Err(ApiError::chat_not_found());
    }
    tracing::info!(chat_id = %session.id, "Deleted chat session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::completion::mock::MockCompletionConnector;
    use crate::connectors::CompletionRole;
    use crate::store::InMemoryChatStore;

    async fn user_in(store: &InMemoryChatStore, email: &str) -> User {
        store
            .insert_user(User::new(email.to_string(), "Traveller".to_string(), None))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn first_message_opens_a_session() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::replying("Destination: Goa");
        let user = user_in(&store, "ana@example.com").await;

        let reply = send_message(
            &store,
            &model,
            &user,
            "Plan a 3 day trip to Goa with a budget of 20000",
            None,
        )
        .await
        .unwrap();
        assert_eq!(reply.reply, "Destination: Goa");

        let sent = model.received();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].len(), 2);
        assert_eq!(sent[0][0].role, CompletionRole::System);
        assert_eq!(sent[0][1].role, CompletionRole::User);
        assert_eq!(sent[0][1].content, "Plan a 3 day trip to Goa with a budget of 20000");

        let history = history(&store, &user, &reply.chat_id.to_string()).await.unwrap();
        let turns: Vec<(Role, &str)> = history
            .messages
            .iter()
            .map(|t| (t.role, t.content.as_str()))
            .collect();
        assert_eq!(
            turns,
            vec![
                (Role::User, "Plan a 3 day trip to Goa with a budget of 20000"),
                (Role::Assistant, "Destination: Goa"),
            ]
        );

        let sessions = list(&store, &user).await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "Plan a 3 day trip to Goa with ");
    }

    #[tokio::test]
    async fn follow_up_replays_the_whole_session() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::replying("ok");
        let user = user_in(&store, "ana@example.com").await;

        let first = send_message(&store, &model, &user, "Trip to Goa, 3 days", None)
            .await
            .unwrap();
        let chat_id = first.chat_id.to_string();
        let second = send_message(&store, &model, &user, "Best time to go there?", Some(&chat_id))
            .await
            .unwrap();
        assert_eq!(second.chat_id, first.chat_id);

        let sent = model.received();
        assert_eq!(sent[1].len(), 4);
        assert_eq!(sent[1][3].content, "Best time to go there?");
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn missing_chat_id_always_opens_a_new_session() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::replying("ok");
        let user = user_in(&store, "ana@example.com").await;

        let a = send_message(&store, &model, &user, "Goa", None).await.unwrap();
        let b = send_message(&store, &model, &user, "Goa", None).await.unwrap();
        assert_ne!(a.chat_id, b.chat_id);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn foreign_chat_is_not_found_and_untouched() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::replying("ok");
        let owner = user_in(&store, "ana@example.com").await;
        let intruder = user_in(&store, "eve@example.com").await;

        let reply = send_message(&store, &model, &owner, "Goa", None).await.unwrap();
        let before = store.message_count().await;
        let chat_id = reply.chat_id.to_string();

        let err = send_message(&store, &model, &intruder, "mine now", Some(&chat_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(store.message_count().await, before);

        assert!(matches!(
            history(&store, &intruder, &chat_id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            delete(&store, &intruder, &chat_id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            history(&store, &owner, "not-a-uuid").await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_completion_stores_no_reply() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::failing();
        let user = user_in(&store, "ana@example.com").await;

        let err = send_message(&store, &model, &user, "Goa", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Upstream(_)));

        let sessions = list(&store, &user).await.unwrap();
        let history = history(&store, &user, &sessions[0].chat_id.to_string())
            .await
            .unwrap();
        assert_eq!(history.messages.len(), 1);
        assert_eq!(history.messages[0].role, Role::User);
    }

    #[tokio::test]
    async fn delete_then_history_is_not_found() {
        let store = InMemoryChatStore::new();
        let model = MockCompletionConnector::replying("ok");
        let user = user_in(&store, "ana@example.com").await;

        let reply = send_message(&store, &model, &user, "Goa", None).await.unwrap();
        let chat_id = reply.chat_id.to_string();

        delete(&store, &user, &chat_id).await.unwrap();
        assert_eq!(store.message_count().await, 0);
        assert!(matches!(
            history(&store, &user, &chat_id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            delete(&store, &user, &chat_id).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
