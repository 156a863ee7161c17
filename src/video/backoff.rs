//! Polling budgets and backoff timing for the provider client.
//!
//! Two independent budgets bound the polling loop: "still processing"
//! responses consume poll attempts with exponential backoff, while errors
//! on a polling call consume network retries with a flat delay. Exhausting
//! either budget times the job out. Delays are deterministic (no jitter).

use std::time::Duration;

/// Maximum number of "still processing" polls before timing out.
pub const MAX_POLL_ATTEMPTS: u32 = 40;

/// Maximum number of failed polling calls before timing out.
pub const MAX_NETWORK_RETRIES: u32 = 40;

/// Base delay between status polls.
pub const POLL_BASE_DELAY: Duration = Duration::from_secs(3);

/// Cap on the delay between status polls.
pub const POLL_MAX_DELAY: Duration = Duration::from_secs(15);

/// Growth factor for the poll backoff.
pub const POLL_GROWTH: f64 = 1.3;

/// Flat delay before retrying a failed polling call.
pub const NETWORK_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Timing and budget configuration for one polling loop.
///
/// Injectable so tests can run the loop in milliseconds.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub growth: f64,
    pub max_poll_attempts: u32,
    pub network_retry_delay: Duration,
    pub max_network_retries: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            base_delay: POLL_BASE_DELAY,
            max_delay: POLL_MAX_DELAY,
            growth: POLL_GROWTH,
            max_poll_attempts: MAX_POLL_ATTEMPTS,
            network_retry_delay: NETWORK_RETRY_DELAY,
            max_network_retries: MAX_NETWORK_RETRIES,
        }
    }
}

/// Delay before the next status poll: `min(base * growth^(attempt-1), max)`.
///
/// `attempt` is 1-based; attempt 1 waits the base delay.
pub fn poll_backoff(attempt: u32, config: &PollConfig) -> Duration {
    let exponent = attempt.saturating_sub(1) as f64;
    let millis = config.base_delay.as_millis() as f64 * config.growth.powf(exponent);
    Duration::from_millis(millis.min(config.max_delay.as_millis() as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_waits_base_delay() {
        let config = PollConfig::default();
        assert_eq!(poll_backoff(1, &config), Duration::from_secs(3));
    }

    #[test]
    fn test_backoff_grows_geometrically() {
        let config = PollConfig::default();
        // Second attempt: 3s * 1.3 = 3.9s, third: 3s * 1.69 = 5.07s.
        let second = poll_backoff(2, &config);
        assert!(second >= Duration::from_millis(3_899));
        assert!(second <= Duration::from_millis(3_901));
        let third = poll_backoff(3, &config);
        assert!(third >= Duration::from_millis(5_069));
        assert!(third <= Duration::from_millis(5_071));
    }

    #[test]
    fn test_backoff_is_capped() {
        let config = PollConfig::default();
        assert_eq!(poll_backoff(20, &config), POLL_MAX_DELAY);
        assert_eq!(poll_backoff(u32::MAX, &config), POLL_MAX_DELAY);
    }

    #[test]
    fn test_backoff_is_monotonic_until_cap() {
        let config = PollConfig::default();
        let mut previous = Duration::ZERO;
        for attempt in 1..=12 {
            let delay = poll_backoff(attempt, &config);
            assert!(delay >= previous);
            previous = delay;
        }
    }

    #[test]
    fn test_default_budgets() {
        let config = PollConfig::default();
        assert_eq!(config.max_poll_attempts, 40);
        assert_eq!(config.max_network_retries, 40);
        assert_eq!(config.network_retry_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_custom_config_scales_delays() {
        let config = PollConfig {
            base_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(40),
            ..PollConfig::default()
        };
        assert_eq!(poll_backoff(1, &config), Duration::from_millis(10));
        assert_eq!(poll_backoff(10, &config), Duration::from_millis(40));
    }
}
