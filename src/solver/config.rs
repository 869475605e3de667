//! Per-search options

use std::time::Duration;

/// Options applied to a single search
///
/// None of these change which word is found first; they only bound the work
/// done or relax the target check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Require a target match to also be a dictionary word
    pub verify_target: bool,
    /// Stop extending paths once they reach this many letters
    pub max_word_len: Option<usize>,
    /// Abort the search once it has run this long
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_target: true,
            max_word_len: None,
            time_limit: None,
        }
    }

    /// Accept any spellable target, dictionary word or not
    #[must_use]
    pub const fn with_verify_target(mut self, verify: bool) -> Self {
        self.verify_target = verify;
        self
    }

    #[must_use]
    pub const fn with_max_word_len(mut self, len: usize) -> Self {
        self.max_word_len = Some(len);
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
