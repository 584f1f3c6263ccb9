//! Wall-clock service.
//!
//! Commands that mention the time (`date`) and the session's record
//! timestamps go through this trait so tests can pin the clock.

use termfolio_types::timestamp::Timestamp;

/// Abstraction over wall-clock time.
pub trait Clock {
    /// Current wall-clock time (UTC).
    fn now(&self) -> Timestamp;
}

/// Clock backed by the host system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Timestamp::from_unix_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        let now = SystemClock.now();
        assert!(now.year >= 2020);
    }
}
