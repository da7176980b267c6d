/// Timestamp parsing and formatting
///
/// Chapter boundaries arrive as "H:MM:SS", "M:SS" or a bare number of
/// seconds; cue timing lines carry fractional seconds down to
/// milliseconds (e.g. "00:13:50.279"). Everything is normalized to
/// seconds as f64.
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A duration value as supplied by a caller: either a bare number of
/// seconds or a clock string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TimeValue {
    /// Already a number of seconds
    Seconds(f64),
    /// Clock string: "H:MM:SS", "M:SS", or a plain number
    Clock(String),
}

impl TimeValue {
    /// Convert to seconds, best effort.
    ///
    /// Malformed strings become 0.0 rather than an error. Used deep
    /// inside cue parsing where one bad value must not abort the run.
    pub fn to_seconds(&self) -> f64 {
        match self {
            TimeValue::Seconds(s) => *s,
            TimeValue::Clock(s) => parse_clock(s).unwrap_or(0.0),
        }
    }

    /// Convert to seconds, rejecting malformed input.
    ///
    /// Used for caller-supplied chapter boundaries, where bad input
    /// should surface before any cue work begins.
    pub fn to_seconds_strict(&self) -> Result<f64, FormatError> {
        match self {
            TimeValue::Seconds(s) => Ok(*s),
            TimeValue::Clock(s) => parse_clock(s).ok_or_else(|| FormatError::new(s.clone())),
        }
    }
}

impl From<f64> for TimeValue {
    fn from(seconds: f64) -> Self {
        TimeValue::Seconds(seconds)
    }
}

impl From<&str> for TimeValue {
    fn from(clock: &str) -> Self {
        TimeValue::Clock(clock.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(clock: String) -> Self {
        TimeValue::Clock(clock)
    }
}

/// Parse "H:MM:SS", "M:SS" or a bare number into fractional seconds.
///
/// Fractional seconds are preserved, so "00:13:50.279" parses to
/// 830.279. Returns None for anything else.
pub fn parse_clock(value: &str) -> Option<f64> {
    let value = value.trim();
    let parts: Vec<&str> = value.split(':').collect();

    match parts.len() {
        3 => {
            let hours: u64 = parts[0].parse().ok()?;
            let minutes: u64 = parts[1].parse().ok()?;
            let seconds: f64 = parts[2].parse().ok()?;
            Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
        }
        2 => {
            let minutes: u64 = parts[0].parse().ok()?;
            let seconds: f64 = parts[1].parse().ok()?;
            Some(minutes as f64 * 60.0 + seconds)
        }
        _ => value.parse::<f64>().ok(),
    }
}

/// Format seconds as "H:MM:SS", or "M:SS" below one hour.
///
/// Matches the chapter-listing output format; fractional seconds are
/// truncated.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_hms() {
        assert_eq!(parse_clock("01:01:01"), Some(3661.0));
        assert_eq!(parse_clock("00:13:50.279"), Some(830.279));
        assert_eq!(parse_clock("10:00:00"), Some(36000.0));
    }

    #[test]
    fn test_parse_clock_ms() {
        assert_eq!(parse_clock("13:50"), Some(830.0));
        assert_eq!(parse_clock("00:05.500"), Some(5.5));
    }

    #[test]
    fn test_parse_clock_bare_number() {
        assert_eq!(parse_clock("90"), Some(90.0));
        assert_eq!(parse_clock("90.5"), Some(90.5));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert_eq!(parse_clock("bogus"), None);
        assert_eq!(parse_clock("1:2:3:4"), None);
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("aa:bb"), None);
    }

    #[test]
    fn test_time_value_lenient() {
        assert_eq!(TimeValue::Seconds(12.5).to_seconds(), 12.5);
        assert_eq!(TimeValue::from("1:30").to_seconds(), 90.0);
        assert_eq!(TimeValue::from("bogus").to_seconds(), 0.0);
    }

    #[test]
    fn test_time_value_strict() {
        assert_eq!(TimeValue::from("1:30").to_seconds_strict(), Ok(90.0));

        let err = TimeValue::from("bogus").to_seconds_strict().unwrap_err();
        assert_eq!(err.value, "bogus");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(3661.0), "01:01:01");
        assert_eq!(format_seconds(125.0), "02:05");
        assert_eq!(format_seconds(0.0), "00:00");
        assert_eq!(format_seconds(59.9), "00:59");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for &s in &[0.0, 59.0, 60.0, 3599.0, 3600.0, 86399.0, 359999.0] {
            let formatted = format_seconds(s);
            assert_eq!(parse_clock(&formatted), Some(s));
        }
    }

    #[test]
    fn test_time_value_deserializes_from_json() {
        let from_number: TimeValue = serde_json::from_str("90.5").unwrap();
        assert_eq!(from_number.to_seconds(), 90.5);

        let from_string: TimeValue = serde_json::from_str("\"1:30\"").unwrap();
        assert_eq!(from_string.to_seconds(), 90.0);
    }
}
