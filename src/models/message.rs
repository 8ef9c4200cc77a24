use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting shown as the first assistant message of every conversation
pub const GREETING: &str =
    "Hello! I'm Campus Navigator. How can I help you find your way around campus today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry of the conversation. The list is append-only between
/// "New Chat" resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_an_assistant_message() {
        let msg = ChatMessage::greeting();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, GREETING);
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = ChatMessage::user("where is building D?");
        let b = ChatMessage::user("where is building D?");
        assert_eq!(a.role, Role::User);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
