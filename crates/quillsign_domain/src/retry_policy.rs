use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Setters, PartialEq, Eq)]
#[setters(into)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds
    pub base_delay_ms: u64,

    /// Upper bound on the backoff delay in milliseconds
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// Total attempt budget for one logical call, initial attempt included.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
