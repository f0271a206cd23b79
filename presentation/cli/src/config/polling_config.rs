use std::time::Duration;

use anyhow::bail;
use business::domain::vision::polling::PollingPolicy;

use super::env;

/// Builds the polling policy from the environment.
///
/// Environment variables:
/// - VISION_POLL_MAX_ATTEMPTS (default: 10)
/// - VISION_POLL_INITIAL_DELAY_MS (default: 1000)
/// - VISION_POLL_MAX_DELAY_MS (default: 10000)
pub fn from_env() -> anyhow::Result<PollingPolicy> {
    let defaults = PollingPolicy::default();
    let max_attempts = env::parsed_or("VISION_POLL_MAX_ATTEMPTS", defaults.max_attempts)?;
    let initial_delay_ms = env::parsed_or(
        "VISION_POLL_INITIAL_DELAY_MS",
        defaults.initial_delay.as_millis() as u64,
    )?;
    let max_delay_ms = env::parsed_or(
        "VISION_POLL_MAX_DELAY_MS",
        defaults.max_delay.as_millis() as u64,
    )?;

    build(max_attempts, initial_delay_ms, max_delay_ms)
}

fn build(max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64) -> anyhow::Result<PollingPolicy> {
    if max_attempts == 0 {
        bail!("VISION_POLL_MAX_ATTEMPTS must be at least 1");
    }
    if initial_delay_ms > max_delay_ms {
        bail!(
            "VISION_POLL_INITIAL_DELAY_MS ({}) must not exceed VISION_POLL_MAX_DELAY_MS ({})",
            initial_delay_ms,
            max_delay_ms
        );
    }
    Ok(PollingPolicy {
        max_attempts,
        initial_delay: Duration::from_millis(initial_delay_ms),
        max_delay: Duration::from_millis(max_delay_ms),
    })
}
