//! Fixed reply engine - always answers with the same line.

use companion_core::{async_trait, ReplyEngine, ReplyError, ReplyRequest, CANNED_RESPONSES};

/// A reply engine that always returns one configured line.
///
/// Useful for deterministic tests of reply delivery.
#[derive(Debug, Clone)]
pub struct FixedReply {
    text: String,
}

impl FixedReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Always answer with the canned response at `index`.
    ///
    /// Returns `None` if the index is outside the canned pool.
    pub fn canned(index: usize) -> Option<Self> {
        CANNED_RESPONSES.get(index).map(|text| Self::new(*text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[async_trait]
impl ReplyEngine for FixedReply {
    async fn reply(&self, _request: ReplyRequest) -> Result<String, ReplyError> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "FixedReply"
    }
}
