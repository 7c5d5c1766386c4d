//! Pacing for the thumbnail polling loop.

use std::time::Duration;

/// Bounds and backoff for re-issuing a batch thumbnail request while any
/// entry is still `Pending`.
///
/// The wait before poll `n + 1` is
/// `min(initial_delay * multiplier^(n - 1), max_delay)`, so the first retry
/// waits exactly `initial_delay`.
///
/// # Example
///
/// ```
/// use rofits_core::PollPolicy;
/// use std::time::Duration;
///
/// let policy = PollPolicy::new().with_max_attempts(4);
/// assert_eq!(policy.delay_for(1), Duration::from_millis(1500));
/// assert_eq!(policy.delay_for(2), Duration::from_millis(3000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    initial_delay: Duration,
    multiplier: u32,
    max_delay: Duration,
    max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1500),
            multiplier: 2,
            max_delay: Duration::from_secs(10),
            max_attempts: 8,
        }
    }
}

impl PollPolicy {
    /// Create a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wait before the first re-poll.
    ///
    /// Defaults to 1.5 seconds.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the growth factor between consecutive waits (minimum 1).
    ///
    /// Defaults to 2.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier.max(1);
        self
    }

    /// Cap a single wait.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the total number of thumbnail requests allowed (minimum 1).
    ///
    /// Defaults to 8.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub const fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait to apply after poll number `attempt` (1-based) came back pending.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = self.multiplier.saturating_pow(exponent);
        self.initial_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Sum of every wait the policy can schedule before giving up.
    pub fn total_budget(&self) -> Duration {
        (1..self.max_attempts).map(|attempt| self.delay_for(attempt)).sum()
    }
}
