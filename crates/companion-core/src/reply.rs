//! The ReplyEngine trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ReplyError;

/// What a reply engine is asked to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    /// Id of the character the reply is for.
    pub character_id: String,
    /// Display name of that character.
    pub character_name: String,
    /// The user's message text.
    pub text: String,
}

impl ReplyRequest {
    pub fn new(
        character_id: impl Into<String>,
        character_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            character_id: character_id.into(),
            character_name: character_name.into(),
            text: text.into(),
        }
    }
}

/// A trait for producing companion replies to user messages.
///
/// Implementations range from canned random lines to real model backends.
/// This trait is object-safe and can be used with `Arc<dyn ReplyEngine>`.
#[async_trait]
pub trait ReplyEngine: Send + Sync {
    /// Produce the text of the companion's reply.
    ///
    /// # Arguments
    ///
    /// * `request` - The character being talked to and the user's message.
    async fn reply(&self, request: ReplyRequest) -> Result<String, ReplyError>;

    /// Get a human-readable name for this engine.
    fn name(&self) -> &str;

    /// Check if the engine is ready to reply.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

#[async_trait]
impl<T: ReplyEngine + ?Sized> ReplyEngine for std::sync::Arc<T> {
    async fn reply(&self, request: ReplyRequest) -> Result<String, ReplyError> {
        (**self).reply(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn is_ready(&self) -> bool {
        (**self).is_ready().await
    }
}
