//! Clock-time handling for the timetable.
//!
//! The timetable stores scheduled times as "HH:MM" strings with no date
//! attached. This module provides a validated time-of-day type and the
//! countdown arithmetic that resolves such times against a wall-clock
//! instant, including the midnight-rollover ambiguity for services that
//! run across the date boundary.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled wall-clock time of day, with no date component.
///
/// Timetable entries carry only "HH:MM"; which calendar day an entry refers
/// to depends on the instant it is compared against. See
/// [`ClockTime::minutes_until`] for how that ambiguity is resolved.
///
/// # Examples
///
/// ```
/// use board_server::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a clock time from hour and minute components.
    ///
    /// Returns `None` if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Signed whole minutes from `now` until this scheduled time.
    ///
    /// The result is floored: positive means the time is in the future,
    /// negative means it has passed, and a time 30 seconds gone is `-1`,
    /// not `0`.
    ///
    /// A candidate instant is built on `now`'s calendar date. Because the
    /// schedule carries no date, a candidate far from `now` is assumed to
    /// belong to the adjacent day: if the candidate is behind `now` and the
    /// hour-of-day gap exceeds 12, it is moved one day forward; if ahead
    /// with a gap over 12 hours, one day back. So at 23:50 a scheduled
    /// "00:05" resolves to 15 minutes from now rather than most of a day
    /// ago.
    ///
    /// This is a heuristic, not a calendar rule: the gap comparison is on
    /// the hour fields alone, and a service genuinely more than 12 hours
    /// out would be misplaced. No movement's relevant display window comes
    /// close to that in practice.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::ClockTime;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .unwrap()
    ///     .and_time(NaiveTime::from_hms_opt(23, 50, 0).unwrap());
    ///
    /// let t = ClockTime::parse_hhmm("00:05").unwrap();
    /// assert_eq!(t.minutes_until(now), 15);
    /// ```
    pub fn minutes_until(&self, now: NaiveDateTime) -> i64 {
        let mut candidate = now.date().and_time(self.0);

        let target_hour = i64::from(self.0.hour());
        let now_hour = i64::from(now.time().hour());

        if candidate < now && now_hour - target_hour > 12 {
            candidate += Duration::days(1);
        } else if candidate > now && target_hour - now_hour > 12 {
            candidate -= Duration::days(1);
        }

        candidate
            .signed_duration_since(now)
            .num_seconds()
            .div_euclid(60)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    fn at_hms(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hour, minute, second).unwrap())
    }

    fn clock(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = clock("00:00");
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = clock("23:59");
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = clock("14:30");
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmm("1430").is_err());
        assert!(ClockTime::parse_hhmm("14:3").is_err());
        assert!(ClockTime::parse_hhmm("14:300").is_err());

        // Missing colon
        assert!(ClockTime::parse_hhmm("14-30").is_err());
        assert!(ClockTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(ClockTime::parse_hhmm("24:00").is_err());
        assert!(ClockTime::parse_hhmm("25:00").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
        assert!(ClockTime::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(clock("00:00").to_string(), "00:00");
        assert_eq!(clock("09:05").to_string(), "09:05");
        assert_eq!(clock("23:59").to_string(), "23:59");
    }

    #[test]
    fn deserialize_from_json() {
        let t: ClockTime = serde_json::from_str("\"07:14\"").unwrap();
        assert_eq!(t, clock("07:14"));

        assert!(serde_json::from_str::<ClockTime>("\"7:14\"").is_err());
        assert!(serde_json::from_str::<ClockTime>("\"24:00\"").is_err());
    }

    #[test]
    fn minutes_until_same_minute_is_zero() {
        assert_eq!(clock("06:58").minutes_until(at(6, 58)), 0);
    }

    #[test]
    fn minutes_until_future_and_past() {
        assert_eq!(clock("07:14").minutes_until(at(7, 12)), 2);
        assert_eq!(clock("10:00").minutes_until(at(7, 0)), 180);
        assert_eq!(clock("06:30").minutes_until(at(7, 0)), -30);
    }

    #[test]
    fn minutes_until_floors_partial_minutes() {
        // 30 seconds past the scheduled minute counts as a minute gone.
        assert_eq!(clock("06:58").minutes_until(at_hms(6, 58, 30)), -1);
        // 90 seconds before the scheduled minute rounds down to 1.
        assert_eq!(clock("07:00").minutes_until(at_hms(6, 58, 30)), 1);
    }

    #[test]
    fn rollover_forward_across_midnight() {
        // Now 23:50, scheduled 00:05: next day, 15 minutes away.
        assert_eq!(clock("00:05").minutes_until(at(23, 50)), 15);
    }

    #[test]
    fn rollover_backward_across_midnight() {
        // Now 00:10, scheduled 23:55: previous day, 15 minutes ago.
        assert_eq!(clock("23:55").minutes_until(at(0, 10)), -15);
    }

    #[test]
    fn no_rollover_at_twelve_hour_gap() {
        // Hour gap of exactly 12 stays on the same day.
        assert_eq!(clock("11:00").minutes_until(at(23, 0)), -720);
        assert_eq!(clock("23:00").minutes_until(at(11, 0)), 720);
    }

    #[test]
    fn rollover_just_past_twelve_hour_gap() {
        // Hour gap of 13 is treated as the adjacent day.
        assert_eq!(clock("10:00").minutes_until(at(23, 0)), 660);
        assert_eq!(clock("09:30").minutes_until(at(23, 0)), 630);
    }

    #[test]
    fn eleven_hour_gap_stays_on_same_day() {
        assert_eq!(clock("12:00").minutes_until(at(23, 0)), -660);
        assert_eq!(clock("18:00").minutes_until(at(7, 0)), 660);
    }

    #[test]
    fn hour_field_comparison_is_the_heuristic() {
        // The gap check compares hour fields only: 23:00 vs 10:59 is a
        // 13-hour field gap even though the instants are 12h01m apart.
        assert_eq!(clock("10:59").minutes_until(at(23, 0)), 719);
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;

        assert_eq!(clock("14:30"), clock("14:30"));
        assert_ne!(clock("14:30"), clock("14:31"));

        let mut set = HashSet::new();
        set.insert(clock("14:30"));
        assert!(set.contains(&clock("14:30")));
        assert!(!set.contains(&clock("14:31")));
    }
}
