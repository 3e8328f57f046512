//! Configuration for a dice session.

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Most dice a single command may roll. `None` means no limit.
    pub max_rolls: Option<usize>,
    /// Marks a line as a command, e.g. `!` in `!r 1d20`.
    pub prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_rolls: Some(crate::roll::DEFAULT_MAX_ROLLS),
            prefix: "!".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_rolls(mut self, max_rolls: usize) -> Self {
        self.max_rolls = Some(max_rolls);
        self
    }

    /// Removes the roll limit.
    pub fn unbounded(mut self) -> Self {
        self.max_rolls = None;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}
