use std::time::Duration;

use quillsign_domain::RetryPolicy;
use rand::Rng;

/// Perturbation applied to a computed backoff delay.
///
/// Injectable so tests can pin the factor and assert exact delays instead of
/// ranges.
pub trait Jitter: Send + Sync {
    /// Factor in `[0.75, 1.25]` by which the clamped delay is scaled.
    fn factor(&self) -> f64;
}

/// Default jitter source drawing from the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngJitter;

impl Jitter for ThreadRngJitter {
    fn factor(&self) -> f64 {
        rand::thread_rng().gen_range(0.75..=1.25)
    }
}

/// Backoff delay before attempt `attempt + 1`, for a 0-based attempt index.
///
/// `min(base * 2^attempt, max)`, scaled by a jitter factor drawn fresh per
/// call and rounded to the nearest millisecond. Spreads retrying clients
/// across time so a recovering backend is not hit in lockstep.
pub fn delay_for_attempt(policy: &RetryPolicy, attempt: u32, jitter: &dyn Jitter) -> Duration {
    let exponential = policy
        .base_delay_ms
        .saturating_mul(2u64.saturating_pow(attempt));
    let capped = exponential.min(policy.max_delay_ms);
    let perturbed = (capped as f64 * jitter.factor()).round().max(0.0);

    Duration::from_millis(perturbed as u64)
}

/// Fixed-factor jitter for deterministic delay assertions.
#[cfg(test)]
pub(crate) struct FixedJitter(pub f64);

#[cfg(test)]
impl Jitter for FixedJitter {
    fn factor(&self) -> f64 {
        self.0
    }
}
