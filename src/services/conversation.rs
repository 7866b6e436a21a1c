//! Builds the message sequence sent to the language model.
//!
//! The whole stored history is replayed on every turn, behind a single fixed system
//! instruction. Nothing is truncated or summarized, so request size grows with the
//! number of turns in the session.

use crate::connectors::{CompletionMessage, CompletionRole};
use crate::models::Message;

/// Characters of each message shown in the debug payload preview.
const PREVIEW_CHARS: usize = 80;

pub const SYSTEM_PROMPT: &str = r#"You are a professional AI travel planner.

Always use previous conversation context to understand the destination.
If the user refers to "there", "that place", or similar words,
assume it refers to the most recently discussed travel destination.

RULES:

1. If the user clearly asks for a trip plan and provides duration or budget,
   respond in the following structured itinerary format:

Destination:
Duration:
Estimated Budget:

Day 1:
- Activity 1
- Activity 2

Day 2:
- Activity 1
- Activity 2

Budget Breakdown:
Stay:
Food:
Transport:
Activities:

Do not use JSON.
Do not use markdown.
Do not use bold formatting.

2. If the user asks a travel-related follow-up question
   (such as transport, weather, food, safety, best time, costs, routes, etc.),
   respond naturally in concise helpful sentences.
   Do NOT use itinerary format unless explicitly requested.

3. If the question is completely unrelated to travel,
   respond with:
   "I can only help with travel planning."

Do not ask for duration or budget again if already provided earlier in the conversation.
Use conversation memory intelligently.
"#;

/// System instruction followed by every stored turn, oldest first.
pub fn assemble(history: &[Message]) -> Vec<CompletionMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(CompletionMessage::system(SYSTEM_PROMPT));
    messages.extend(history.iter().map(|message| CompletionMessage {
        role: CompletionRole::from(message.role),
        content: message.content.clone(),
    }));

    if tracing::enabled!(tracing::Level::DEBUG) {
        for m in &messages {
            let preview: String = m.content.chars().take(PREVIEW_CHARS).collect();
            tracing::debug!(role = ?m.role, "{}", preview);
        }
    }

    messages
}
