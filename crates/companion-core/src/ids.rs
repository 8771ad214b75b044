//! Time-based unique id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Generates ids from the current time in milliseconds.
///
/// Two calls within the same millisecond would collide, so each id is bumped
/// to at least one past the previous one. Ids from a single generator are
/// strictly increasing.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next raw millisecond token.
    pub fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }

    /// Id for a chat message.
    pub fn message_id(&self) -> String {
        self.next_millis().to_string()
    }

    /// Id for a user-created character.
    pub fn custom_character_id(&self) -> String {
        format!("custom-{}", self.next_millis())
    }
}
