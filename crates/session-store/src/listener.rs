//! State change listener trait and implementations.

use async_trait::async_trait;
use companion_core::{Category, Sender};

use crate::state::{AuthPrompt, Section};

/// A completed store transition that a view layer may want to re-render on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SignedIn { email: String },
    SignedOut,
    AuthPromptChanged(AuthPrompt),
    Navigated(Section),
    ChatOpened { character_id: String, created: bool },
    ChatClosed,
    MessageAppended { character_id: String, sender: Sender },
    /// A scheduled reply was produced but not appended anywhere.
    ReplyDropped { character_id: String, reason: String },
    FavoriteToggled { character_id: String, favorite: bool },
    CharacterCreated { character_id: String },
    CharacterDeleted { character_id: String },
    SidebarToggled { open: bool },
    CategoryChanged(Category),
}

/// Trait for observing store transitions.
///
/// Called after the transition has been applied and the state lock released.
#[async_trait]
pub trait StoreListener: Send + Sync {
    async fn on_event(&self, event: &StoreEvent);
}

/// A listener that ignores every event.
#[derive(Debug, Clone, Default)]
pub struct NoOpListener;

#[async_trait]
impl StoreListener for NoOpListener {
    async fn on_event(&self, _event: &StoreEvent) {}
}

/// A listener that logs every event at debug level.
#[derive(Debug, Clone, Default)]
pub struct LoggingListener;

#[async_trait]
impl StoreListener for LoggingListener {
    async fn on_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::ReplyDropped { character_id, reason } => {
                tracing::warn!("Reply for {} dropped: {}", character_id, reason);
            }
            other => tracing::debug!("Store event: {:?}", other),
        }
    }
}
