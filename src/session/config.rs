//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::policy::{Difficulty, PolicyConfig};

/// Default round budget per session.
pub const DEFAULT_MAX_TRIES: u32 = 10;

/// Session-level configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rounds before the session exhausts (None = unbounded).
    pub max_tries: Option<u32>,

    /// FIFO cap on retained player history (None = unbounded).
    pub history_capacity: Option<usize>,

    /// Opponent policy parameters.
    pub policy: PolicyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_tries: Some(DEFAULT_MAX_TRIES),
            history_capacity: None,
            policy: PolicyConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Build a config from a difficulty preset.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            policy: difficulty.policy(),
            ..Self::default()
        }
    }

    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = Some(max_tries);
        self
    }

    pub fn with_unbounded_tries(mut self) -> Self {
        self.max_tries = None;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Reject out-of-range parameters.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.policy.validate()
    }
}
