//! Canned reply engine - picks a random line from a fixed pool.

use std::sync::Mutex;

use companion_core::{async_trait, ReplyEngine, ReplyError, ReplyRequest, CANNED_RESPONSES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// A reply engine that answers with a uniformly random canned line.
///
/// The user's text is ignored. Use [`CannedReplies::seeded`] for a
/// reproducible sequence in tests.
#[derive(Debug)]
pub struct CannedReplies {
    pool: Vec<String>,
    rng: Mutex<StdRng>,
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new()
    }
}

impl CannedReplies {
    /// Create an engine over the built-in response pool.
    pub fn new() -> Self {
        Self::with_pool(CANNED_RESPONSES.iter().copied())
    }

    /// Create an engine over the built-in pool with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_pool_and_rng(CANNED_RESPONSES.iter().copied(), StdRng::seed_from_u64(seed))
    }

    /// Create an engine over a custom pool.
    pub fn with_pool<I, S>(pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pool_and_rng(pool, StdRng::from_entropy())
    }

    pub fn with_pool_and_rng<I, S>(pool: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pool: pool.into_iter().map(Into::into).collect(),
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self) -> Result<String, ReplyError> {
        if self.pool.is_empty() {
            return Err(ReplyError::EmptyPool);
        }
        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0..self.pool.len())
        };
        Ok(self.pool[index].clone())
    }
}

#[async_trait]
impl ReplyEngine for CannedReplies {
    async fn reply(&self, request: ReplyRequest) -> Result<String, ReplyError> {
        let reply = self.pick()?;
        debug!("Canned reply for {}: {}", request.character_id, reply);
        Ok(reply)
    }

    fn name(&self) -> &str {
        "CannedReplies"
    }
}
