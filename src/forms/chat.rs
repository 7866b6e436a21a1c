use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MessageForm {
    #[validate(min_length = 1)]
    pub message: String,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl MessageForm {
    /// A blank `chat_id` means "start a new chat", same as an absent one.
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
