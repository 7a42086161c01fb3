//! Clock Port - Wall-clock source for event and invoice timestamps.

use std::sync::Mutex;

use chrono::{Local, NaiveDateTime};

/// Timestamp layout used on the wire (minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of the current local time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;

    /// Current time formatted as `YYYY-MM-DD HH:MM`.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Format a local time at minute precision.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    at: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub const fn new(at: NaiveDateTime) -> Self {
        Self { at: Mutex::new(at) }
    }

    /// Move the clock to `at`.
    pub fn set(&self, at: NaiveDateTime) {
        *self.at.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = at;
    }

    /// Move the clock forward.
    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.at.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.at.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_format_drops_seconds() {
        assert_eq!(format_timestamp(at(9, 5, 59)), "2026-03-07 09:05");
    }

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let clock = FixedClock::new(at(8, 0, 0));
        assert_eq!(clock.timestamp(), "2026-03-07 08:00");
        clock.advance(chrono::Duration::minutes(90));
        assert_eq!(clock.timestamp(), "2026-03-07 09:30");
        clock.set(at(23, 59, 0));
        assert_eq!(clock.timestamp(), "2026-03-07 23:59");
    }

    #[test]
    fn test_system_clock_has_minute_layout() {
        let ts = SystemClock.timestamp();
        assert_eq!(ts.len(), "YYYY-MM-DD HH:MM".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
