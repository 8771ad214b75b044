//! Mock reply engines for the AI companion session store.
//!
//! This crate provides mock implementations of the `ReplyEngine` trait:
//! - `CannedReplies` - Picks a random line from the canned pool
//! - `FixedReply` - Always answers with the same line
//! - `DelayedReplies` - Wraps another engine with a simulated typing delay
//!
//! # Example
//!
//! ```rust
//! use mock_companion::{CannedReplies, DelayPolicy, DelayedReplies, ReplyEngine, ReplyRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_companion::ReplyError> {
//!     let engine = DelayedReplies::new(CannedReplies::new(), DelayPolicy::immediate());
//!
//!     let request = ReplyRequest::new("amelia", "Amelia", "Hi!");
//!     let reply = engine.reply(request).await?;
//!     println!("Amelia: {}", reply);
//!     Ok(())
//! }
//! ```

mod canned;
mod delayed;
mod fixed;

// Re-export companion-core types for convenience
pub use companion_core::{async_trait, ReplyEngine, ReplyError, ReplyRequest};

pub use canned::CannedReplies;
pub use delayed::{DelayPolicy, DelayedReplies, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY};
pub use fixed::FixedReply;
