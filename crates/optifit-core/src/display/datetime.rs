//! DateTime and elapsed-time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A wrapper around a second count that formats as zero-padded `HH:MM:SS`.
///
/// Used for workout timer durations; hours are not capped, so very long
/// sessions render as e.g. `27:00:00`.
pub struct ElapsedTime(pub u64);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hrs = self.0 / 3600;
        let mins = (self.0 % 3600) / 60;
        let secs = self.0 % 60;
        write!(f, "{hrs:02}:{mins:02}:{secs:02}")
    }
}
