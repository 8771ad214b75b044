//! Core types and traits for the AI companion session store.
//!
//! This crate provides the shared vocabulary used by the store and the
//! reply engines:
//!
//! - [`Character`] / [`CharacterDraft`] / [`Category`] - Companion profiles
//! - [`Message`] / [`ChatSession`] - Per-character chat history
//! - [`Catalog`] - The built-in character list and canned reply pool
//! - [`ReplyEngine`] - The trait every reply implementation provides
//! - [`IdGenerator`] - Time-based unique ids for messages and custom characters
//!
//! # Example
//!
//! ```rust
//! use companion_core::{async_trait, ReplyEngine, ReplyError, ReplyRequest};
//!
//! struct Shy;
//!
//! #[async_trait]
//! impl ReplyEngine for Shy {
//!     async fn reply(&self, _request: ReplyRequest) -> Result<String, ReplyError> {
//!         Ok("...hi.".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Shy"
//!     }
//! }
//! ```

mod catalog;
mod character;
mod error;
mod ids;
mod message;
mod reply;

pub use catalog::{Catalog, CANNED_RESPONSES, DEFAULT_CUSTOM_IMAGE};
pub use character::{Category, Character, CharacterDraft};
pub use error::{ParseError, ReplyError};
pub use ids::IdGenerator;
pub use message::{ChatSession, Message, Sender};
pub use reply::{ReplyEngine, ReplyRequest};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
