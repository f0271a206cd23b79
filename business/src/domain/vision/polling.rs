use std::time::Duration;

/// Bounded exponential backoff for polling a pending analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for PollingPolicy {
    /// Ten attempts, starting at one second and capped at ten.
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl PollingPolicy {
    /// Delay before the attempt following `delay`.
    pub fn next_delay(&self, delay: Duration) -> Duration {
        delay.saturating_mul(2).min(self.max_delay)
    }

    /// Waits between attempts: one fewer than `max_attempts`.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        let first = self.initial_delay.min(self.max_delay);
        std::iter::successors(Some(first), move |delay| Some(self.next_delay(*delay)))
            .take(self.max_attempts.saturating_sub(1) as usize)
    }
}
