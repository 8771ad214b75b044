//! Configuration for SessionStore.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use mock_companion::{DelayPolicy, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY};

use crate::error::StoreError;

/// Default time the mock image generator "works" before showing results.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Default minimum password length accepted by the auth form.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Which session a delayed reply is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyTarget {
    /// The character the user was talking to when the message was sent.
    #[default]
    Captured,
    /// Whichever character is active when the reply arrives. Replies that
    /// arrive while no chat is open are dropped.
    ActiveAtDelivery,
}

impl ReplyTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Captured => "captured",
            Self::ActiveAtDelivery => "active",
        }
    }
}

impl fmt::Display for ReplyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplyTarget {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "captured" => Ok(Self::Captured),
            "active" | "active_at_delivery" => Ok(Self::ActiveAtDelivery),
            other => Err(StoreError::Config(format!(
                "COMPANION_REPLY_TARGET must be 'captured' or 'active', got '{}'",
                other
            ))),
        }
    }
}

/// Configuration for SessionStore.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Delay before a companion reply appears.
    pub reply_delay: DelayPolicy,

    /// Which session delayed replies are delivered to.
    pub reply_target: ReplyTarget,

    /// Simulated duration of a mock image generation.
    pub generation_delay: Duration,

    /// Minimum password length for sign-in and sign-up forms.
    pub min_password_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reply_delay: DelayPolicy::default(),
            reply_target: ReplyTarget::default(),
            generation_delay: DEFAULT_GENERATION_DELAY,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `COMPANION_REPLY_MIN_DELAY_MS` - Shortest reply delay (default: 1000)
    /// - `COMPANION_REPLY_MAX_DELAY_MS` - Exclusive upper reply delay (default: 3000)
    /// - `COMPANION_REPLY_TARGET` - `captured` or `active` (default: captured)
    /// - `COMPANION_GENERATION_DELAY_MS` - Mock image generation time (default: 2000)
    /// - `COMPANION_MIN_PASSWORD_LEN` - Minimum password length (default: 6)
    pub fn from_env() -> Result<Self, StoreError> {
        let min_delay = env_millis("COMPANION_REPLY_MIN_DELAY_MS")?.unwrap_or(DEFAULT_MIN_DELAY);
        let max_delay = env_millis("COMPANION_REPLY_MAX_DELAY_MS")?.unwrap_or(DEFAULT_MAX_DELAY);

        if max_delay <= min_delay {
            return Err(StoreError::Config(format!(
                "COMPANION_REPLY_MAX_DELAY_MS ({}) must be greater than COMPANION_REPLY_MIN_DELAY_MS ({})",
                max_delay.as_millis(),
                min_delay.as_millis()
            )));
        }

        let reply_target = match env::var("COMPANION_REPLY_TARGET") {
            Ok(value) => value.parse()?,
            Err(_) => ReplyTarget::default(),
        };

        let generation_delay =
            env_millis("COMPANION_GENERATION_DELAY_MS")?.unwrap_or(DEFAULT_GENERATION_DELAY);

        let min_password_len = match env::var("COMPANION_MIN_PASSWORD_LEN") {
            Ok(value) => value.trim().parse().map_err(|_| {
                StoreError::Config(format!(
                    "COMPANION_MIN_PASSWORD_LEN must be a number, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_MIN_PASSWORD_LEN,
        };

        Ok(Self {
            reply_delay: DelayPolicy::Uniform {
                min: min_delay,
                max: max_delay,
            },
            reply_target,
            generation_delay,
            min_password_len,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig.
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the reply delay policy.
    pub fn reply_delay(mut self, policy: DelayPolicy) -> Self {
        self.config.reply_delay = policy;
        self
    }

    /// Deliver replies with no delay.
    pub fn immediate_replies(mut self) -> Self {
        self.config.reply_delay = DelayPolicy::immediate();
        self
    }

    /// Set which session replies are delivered to.
    pub fn reply_target(mut self, target: ReplyTarget) -> Self {
        self.config.reply_target = target;
        self
    }

    /// Set the mock image generation time.
    pub fn generation_delay(mut self, delay: Duration) -> Self {
        self.config.generation_delay = delay;
        self
    }

    /// Set the minimum password length.
    pub fn min_password_len(mut self, len: usize) -> Self {
        self.config.min_password_len = len;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> StoreConfig {
        self.config
    }
}

fn env_millis(name: &str) -> Result<Option<Duration>, StoreError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| {
                StoreError::Config(format!("{} must be a number of milliseconds, got '{}'", name, value))
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.reply_delay, DelayPolicy::uniform_millis(1000, 3000));
        assert_eq!(config.reply_target, ReplyTarget::Captured);
        assert_eq!(config.generation_delay, Duration::from_millis(2000));
        assert_eq!(config.min_password_len, 6);
    }

    #[test]
    fn test_builder_all_options() {
        let config = StoreConfig::builder()
            .reply_delay(DelayPolicy::uniform_millis(10, 20))
            .reply_target(ReplyTarget::ActiveAtDelivery)
            .generation_delay(Duration::from_millis(5))
            .min_password_len(8)
            .build();

        assert_eq!(config.reply_delay, DelayPolicy::uniform_millis(10, 20));
        assert_eq!(config.reply_target, ReplyTarget::ActiveAtDelivery);
        assert_eq!(config.generation_delay, Duration::from_millis(5));
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn test_immediate_replies() {
        let config = StoreConfig::builder().immediate_replies().build();
        assert_eq!(config.reply_delay, DelayPolicy::Fixed(Duration::ZERO));
    }

    #[test]
    fn test_reply_target_parse() {
        assert_eq!("captured".parse::<ReplyTarget>().unwrap(), ReplyTarget::Captured);
        assert_eq!("ACTIVE".parse::<ReplyTarget>().unwrap(), ReplyTarget::ActiveAtDelivery);
        assert!(matches!(
            "later".parse::<ReplyTarget>(),
            Err(StoreError::Config(_))
        ));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_companion_vars() {
            std::env::remove_var("COMPANION_REPLY_MIN_DELAY_MS");
            std::env::remove_var("COMPANION_REPLY_MAX_DELAY_MS");
            std::env::remove_var("COMPANION_REPLY_TARGET");
            std::env::remove_var("COMPANION_GENERATION_DELAY_MS");
            std::env::remove_var("COMPANION_MIN_PASSWORD_LEN");
        }

        // Scenario 1: nothing set, defaults used
        clear_all_companion_vars();
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.reply_delay, DelayPolicy::uniform_millis(1000, 3000));
        assert_eq!(config.reply_target, ReplyTarget::Captured);
        assert_eq!(config.min_password_len, 6);

        // Scenario 2: all vars set
        clear_all_companion_vars();
        std::env::set_var("COMPANION_REPLY_MIN_DELAY_MS", "50");
        std::env::set_var("COMPANION_REPLY_MAX_DELAY_MS", "150");
        std::env::set_var("COMPANION_REPLY_TARGET", "active");
        std::env::set_var("COMPANION_GENERATION_DELAY_MS", "10");
        std::env::set_var("COMPANION_MIN_PASSWORD_LEN", "8");

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.reply_delay, DelayPolicy::uniform_millis(50, 150));
        assert_eq!(config.reply_target, ReplyTarget::ActiveAtDelivery);
        assert_eq!(config.generation_delay, Duration::from_millis(10));
        assert_eq!(config.min_password_len, 8);

        // Scenario 3: inverted delay range
        clear_all_companion_vars();
        std::env::set_var("COMPANION_REPLY_MIN_DELAY_MS", "3000");
        std::env::set_var("COMPANION_REPLY_MAX_DELAY_MS", "1000");
        match StoreConfig::from_env() {
            Err(StoreError::Config(msg)) => assert!(msg.contains("COMPANION_REPLY_MAX_DELAY_MS")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        // Scenario 4: non-numeric value
        clear_all_companion_vars();
        std::env::set_var("COMPANION_GENERATION_DELAY_MS", "soon");
        match StoreConfig::from_env() {
            Err(StoreError::Config(msg)) => assert!(msg.contains("COMPANION_GENERATION_DELAY_MS")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        // Cleanup
        clear_all_companion_vars();
    }
}
