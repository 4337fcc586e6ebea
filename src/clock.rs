//! Timestamp source for the greeting

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Source of the wall-clock time printed on the second line.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// ISO 8601 with second precision and a numeric offset (`+00:00`, never `Z`).
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_format_utc_uses_numeric_offset() {
        let ts = at("2022-09-10T23:48:26Z");
        assert_eq!(format_timestamp(&ts), "2022-09-10T23:48:26+00:00");
    }

    #[test]
    fn test_format_keeps_local_offset() {
        let ts = at("2022-09-11T08:48:26+09:00");
        assert_eq!(format_timestamp(&ts), "2022-09-11T08:48:26+09:00");

        let ts = at("2022-09-10T19:18:26-04:30");
        assert_eq!(format_timestamp(&ts), "2022-09-10T19:18:26-04:30");
    }

    #[test]
    fn test_format_drops_subseconds() {
        let ts = at("2022-09-10T23:48:26.987654+00:00");
        assert_eq!(format_timestamp(&ts), "2022-09-10T23:48:26+00:00");
    }

    #[test]
    fn test_fixed_clock() {
        let ts = at("2022-09-10T23:48:26+00:00");
        let clock = FixedClock(ts);
        assert_eq!(clock.now(), ts);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_system_clock_round_trips_through_format() {
        let formatted = format_timestamp(&SystemClock.now());
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }
}
