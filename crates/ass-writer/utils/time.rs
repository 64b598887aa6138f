//! Dialogue timestamps in ASS clock format
//!
//! ASS event times are offsets from the start of playback written as
//! `H:MM:SS.CC`: hours without padding (growing past one digit as needed),
//! zero-padded minutes and seconds, and two digits of hundredths.

use alloc::vec::Vec;
use core::{fmt, ops::Add, str::FromStr, time::Duration};

use super::errors::{invalid_time, WriterError};

/// Milliseconds in one hour
const HOUR_MS: u64 = 3_600_000;
/// Milliseconds in one minute
const MINUTE_MS: u64 = 60_000;
/// Milliseconds in one second
const SECOND_MS: u64 = 1_000;

/// Offset from the start of script playback
///
/// Stored with millisecond precision and rendered with hundredth-of-a-second
/// resolution. Sub-hundredth precision is truncated on output, never rounded.
///
/// # Examples
///
/// ```rust
/// use ass_writer::Timestamp;
/// use core::time::Duration;
///
/// let start = Timestamp::from_millis(0);
/// let end = start + Duration::from_millis(200);
/// assert_eq!(end.to_string(), "0:00:00.20");
///
/// let late: Timestamp = "12:34:56.78".parse()?;
/// assert_eq!(late.as_centiseconds(), 4_529_678);
/// # Ok::<(), ass_writer::WriterError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp {
    millis: u64,
}

impl Timestamp {
    /// Start of playback
    pub const ZERO: Self = Self { millis: 0 };

    /// Create a timestamp from milliseconds since start of playback
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a timestamp from a duration since start of playback
    ///
    /// Sub-millisecond precision is dropped. Durations too large for
    /// `u64` milliseconds saturate.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            millis: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Create a timestamp from clock components
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::InvalidTime`] if minutes or seconds are 60 or
    /// more, or centiseconds are 100 or more.
    pub fn new(hours: u32, minutes: u32, seconds: u32, centiseconds: u32) -> Result<Self, WriterError> {
        check_ranges(minutes, seconds, centiseconds)
            .map_err(|(value, reason)| invalid_time(value, reason))?;

        Ok(Self {
            millis: u64::from(hours) * HOUR_MS
                + u64::from(minutes) * MINUTE_MS
                + u64::from(seconds) * SECOND_MS
                + u64::from(centiseconds) * 10,
        })
    }

    /// Milliseconds since start of playback
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Whole hundredths of a second since start of playback
    #[must_use]
    pub const fn as_centiseconds(self) -> u64 {
        self.millis / 10
    }

    /// Offset as a [`Duration`]
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.millis)
    }

    /// Add a duration, returning `None` on overflow
    #[must_use]
    pub fn checked_add(self, rhs: Duration) -> Option<Self> {
        let rhs = u64::try_from(rhs.as_millis()).ok()?;
        self.millis.checked_add(rhs).map(Self::from_millis)
    }

    /// Time elapsed from `earlier` to `self`, or `None` if `earlier` is later
    #[must_use]
    pub fn checked_duration_since(self, earlier: Self) -> Option<Duration> {
        self.millis
            .checked_sub(earlier.millis)
            .map(Duration::from_millis)
    }
}

/// Range check for clock components, reporting the offending value
fn check_ranges(minutes: u32, seconds: u32, centiseconds: u32) -> Result<(), (u32, &'static str)> {
    if minutes >= 60 {
        return Err((minutes, "minutes must be < 60"));
    }
    if seconds >= 60 {
        return Err((seconds, "seconds must be < 60"));
    }
    if centiseconds >= 100 {
        return Err((centiseconds, "centiseconds must be < 100"));
    }
    Ok(())
}

/// Parse one clock component made only of ASCII digits
fn parse_digits(component: &str, input: &str, reason: &str) -> Result<u32, WriterError> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_time(input, reason));
    }
    component.parse().map_err(|_| invalid_time(input, reason))
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    /// Saturates at the largest representable timestamp
    fn add(self, rhs: Duration) -> Self {
        self.checked_add(rhs)
            .unwrap_or(Self::from_millis(u64::MAX))
    }
}

impl From<Duration> for Timestamp {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.millis / HOUR_MS;
        let minutes = self.millis % HOUR_MS / MINUTE_MS;
        let seconds = self.millis % MINUTE_MS / SECOND_MS;
        let centiseconds = self.millis % SECOND_MS / 10;

        write!(f, "{hours}:{minutes:02}:{seconds:02}.{centiseconds:02}")
    }
}

impl FromStr for Timestamp {
    type Err = WriterError;

    /// Parse `H:MM:SS.CC` (a single fractional digit means tenths)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(invalid_time(s, "expected H:MM:SS.CC"));
        }

        let hours = parse_digits(parts[0], s, "invalid hours")?;
        let minutes = parse_digits(parts[1], s, "invalid minutes")?;

        let (seconds_str, frac_str) = match parts[2].split_once('.') {
            Some((secs, frac)) => (secs, Some(frac)),
            None => (parts[2], None),
        };
        let seconds = parse_digits(seconds_str, s, "invalid seconds")?;

        let centiseconds = match frac_str {
            None => 0,
            Some(frac) => {
                let value = parse_digits(frac, s, "invalid centiseconds")?;
                match frac.len() {
                    1 => value * 10,
                    2 => value,
                    _ => return Err(invalid_time(s, "too many decimal places")),
                }
            }
        };

        // Range errors name the whole input, not just the component
        check_ranges(minutes, seconds, centiseconds)
            .map_err(|(_, reason)| invalid_time(s, reason))?;
        Self::new(hours, minutes, seconds, centiseconds)
    }
}
