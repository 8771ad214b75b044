//! Chat messages and per-character sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(id: impl Into<String>, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// Create a message written by the user.
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::User)
    }

    /// Create a message written by the companion.
    pub fn ai(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::Ai)
    }
}

/// The ordered message history for one character.
///
/// Messages are append-only; append order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub character_id: String,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Create an empty session for a character.
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            messages: Vec::new(),
        }
    }

    /// Create a session seeded with the character's greeting.
    pub fn with_greeting(character_id: impl Into<String>, greeting: Message) -> Self {
        let mut session = Self::new(character_id);
        session.push(greeting);
        session
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_append_order() {
        let mut session = ChatSession::with_greeting("amelia", Message::ai("1", "Hey there!"));
        session.push(Message::user("2", "Hi"));
        session.push(Message::ai("3", "How was your day?"));

        let contents: Vec<_> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["Hey there!", "Hi", "How was your day?"]);
        assert_eq!(session.len(), 3);
        assert_eq!(session.last().unwrap().sender, Sender::Ai);
    }

    #[test]
    fn test_empty_session() {
        let session = ChatSession::new("sakura");
        assert!(session.is_empty());
        assert!(session.last().is_none());
        assert_eq!(session.character_id, "sakura");
    }

    #[test]
    fn test_sender_serde() {
        let msg = Message::user("1", "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        assert_eq!(json["content"], "hello");
    }
}
