//! Delayed reply engine - wraps another engine with artificial typing delay.

use std::sync::Mutex;
use std::time::Duration;

use companion_core::{async_trait, ReplyEngine, ReplyError, ReplyRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;

/// Shortest simulated typing delay.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound (exclusive) of the simulated typing delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3000);

/// How long a [`DelayedReplies`] waits before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    /// Always wait exactly this long.
    Fixed(Duration),
    /// Wait a duration drawn uniformly from `[min, max)`.
    Uniform { min: Duration, max: Duration },
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::Uniform {
            min: DEFAULT_MIN_DELAY,
            max: DEFAULT_MAX_DELAY,
        }
    }
}

impl DelayPolicy {
    pub fn uniform_millis(min: u64, max: u64) -> Self {
        Self::Uniform {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// No delay at all.
    pub fn immediate() -> Self {
        Self::Fixed(Duration::ZERO)
    }

    /// Draw one delay. An empty range yields its lower bound.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Uniform { min, max } if min >= max => min,
            Self::Uniform { min, max } => rng.gen_range(min..max),
        }
    }

    /// Longest delay this policy can produce.
    pub fn upper_bound(&self) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Uniform { min, max } => min.max(max),
        }
    }
}

/// A reply engine that wraps another engine and waits before answering.
///
/// Simulates the companion "typing" before the reply appears.
pub struct DelayedReplies<R: ReplyEngine> {
    inner: R,
    policy: DelayPolicy,
    rng: Mutex<StdRng>,
}

impl<R: ReplyEngine> DelayedReplies<R> {
    /// Wrap `inner` with the given delay policy.
    pub fn new(inner: R, policy: DelayPolicy) -> Self {
        Self::with_rng(inner, policy, StdRng::from_entropy())
    }

    /// Wrap `inner` with a seeded RNG for reproducible delays.
    pub fn with_rng(inner: R, policy: DelayPolicy, rng: StdRng) -> Self {
        Self {
            inner,
            policy,
            rng: Mutex::new(rng),
        }
    }

    /// Wrap `inner` with a fixed delay in milliseconds.
    pub fn with_millis(inner: R, millis: u64) -> Self {
        Self::new(inner, DelayPolicy::Fixed(Duration::from_millis(millis)))
    }

    fn next_delay(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.policy.sample(&mut *rng)
    }
}

#[async_trait]
impl<R: ReplyEngine> ReplyEngine for DelayedReplies<R> {
    async fn reply(&self, request: ReplyRequest) -> Result<String, ReplyError> {
        let delay = self.next_delay();
        sleep(delay).await;
        self.inner.reply(request).await
    }

    fn name(&self) -> &str {
        "DelayedReplies"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedReply;
    use tokio::time::Instant;

    fn request() -> ReplyRequest {
        ReplyRequest::new("erik", "Erik", "hello")
    }

    #[test]
    fn test_default_policy_bounds() {
        let policy = DelayPolicy::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let delay = policy.sample(&mut rng);
            assert!(delay >= DEFAULT_MIN_DELAY);
            assert!(delay < DEFAULT_MAX_DELAY);
        }
        assert_eq!(policy.upper_bound(), DEFAULT_MAX_DELAY);
    }

    #[test]
    fn test_degenerate_range() {
        let policy = DelayPolicy::uniform_millis(500, 500);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(policy.sample(&mut rng), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_reply() {
        let engine = DelayedReplies::with_millis(FixedReply::new("late"), 1500);

        let start = Instant::now();
        let reply = engine.reply(request()).await.unwrap();

        assert_eq!(reply, "late");
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_uniform_delay_within_range() {
        let engine = DelayedReplies::with_rng(
            FixedReply::new("ok"),
            DelayPolicy::default(),
            StdRng::seed_from_u64(11),
        );

        let start = Instant::now();
        engine.reply(request()).await.unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= DEFAULT_MIN_DELAY);
        assert!(elapsed < DEFAULT_MAX_DELAY + Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_engine_name() {
        let engine = DelayedReplies::new(FixedReply::new("x"), DelayPolicy::immediate());
        assert_eq!(engine.name(), "DelayedReplies");
        assert!(engine.is_ready().await);
    }
}
