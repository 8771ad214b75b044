//! In-memory session store for the AI companion app.
//!
//! [`SessionStore`] owns everything the UI renders from: the signed-in user,
//! which auth prompt is open, the current section, the active chat, per-character
//! chat history, favorites, custom characters and a couple of UI flags. All
//! state lives in memory and is gone when the store is dropped.
//!
//! Sending a message appends it immediately and schedules a companion reply
//! through a [`ReplyEngine`]. By default the reply is a random canned line
//! delivered after 1-3 seconds.
//!
//! # Example
//!
//! ```rust,no_run
//! use session_store::{SessionStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), session_store::StoreError> {
//!     let store = SessionStore::new(StoreConfig::from_env()?);
//!
//!     store.sign_in("you@example.com", "secret").await;
//!     store.open_chat_by_id("amelia").await?;
//!
//!     if let Some(pending) = store.send_message("Hi Amelia!").await {
//!         pending.settled().await;
//!     }
//!
//!     if let Some(session) = store.session("amelia").await {
//!         for message in session.messages() {
//!             println!("{:?}: {}", message.sender, message.content);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod forms;
mod listener;
mod premium;
mod state;
mod store;
mod wizard;

pub use config::{
    ReplyTarget, StoreConfig, StoreConfigBuilder, DEFAULT_GENERATION_DELAY,
    DEFAULT_MIN_PASSWORD_LEN,
};
pub use error::{FormError, StoreError};
pub use forms::{validate_draft, Credentials};
pub use listener::{LoggingListener, NoOpListener, StoreEvent, StoreListener};
pub use premium::{popular_plan, Feature, Plan, FEATURES, PLANS};
pub use state::{AppState, AuthPrompt, Section, User};
pub use store::{PendingReply, SessionStore, SessionStoreBuilder, MESSAGE_SUGGESTIONS};
pub use wizard::{ImageStyle, ImageWizard, WizardStep, IMAGES_PER_RUN};

// Re-export companion-core types for convenience
pub use companion_core::{
    async_trait, Catalog, Category, Character, CharacterDraft, ChatSession, Message, ReplyEngine,
    ReplyError, ReplyRequest, Sender, CANNED_RESPONSES, DEFAULT_CUSTOM_IMAGE,
};
pub use mock_companion::{CannedReplies, DelayPolicy, DelayedReplies, FixedReply};
