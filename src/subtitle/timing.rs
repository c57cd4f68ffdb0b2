//! Cue timestamp grammar for numbered subtitles.
//!
//! ```text
//! HH:MM:SS,mmm --> HH:MM:SS,mmm [position hints]
//! ```
//!
//! Hours may run past two digits and the millisecond separator may be `,`
//! or `.`. Only the start of the range matters for time-bound truncation,
//! but both ends are validated so that a half-written range is reported.

use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between the start and end timestamp of a cue.
pub const RANGE_SEPARATOR: &str = "-->";

lazy_static! {
    static ref TIMESTAMP: Regex =
        Regex::new(r"^\s*(\d+):([0-5]\d):([0-5]\d)[,.](\d{1,3})\s*$").unwrap();
}

/// Parse a single `HH:MM:SS,mmm` timestamp.
pub fn parse_timestamp(text: &str) -> Option<Duration> {
    let caps = TIMESTAMP.captures(text)?;
    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    // "5" after the comma means 500 ms, not 5 ms
    let frac = &caps[4];
    let millis: u64 = format!("{frac:0<3}").parse().ok()?;

    let secs = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?;
    Some(Duration::from_secs(secs) + Duration::from_millis(millis))
}

/// Parse a cue timestamp range line into `(start, end)`.
pub fn parse_range(line: &str) -> Option<(Duration, Duration)> {
    let (start, rest) = line.split_once(RANGE_SEPARATOR)?;
    // Anything after the end timestamp (SSA-ish position hints) is ignored
    let end = rest.split_whitespace().next()?;
    Some((parse_timestamp(start)?, parse_timestamp(end)?))
}

/// Whole minutes elapsed at `start`.
pub fn elapsed_minutes(start: Duration) -> u64 {
    start.as_secs() / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            parse_timestamp("01:02:03,456"),
            Some(Duration::from_millis(3_723_456))
        );
        assert_eq!(
            parse_timestamp("00:00:01.5"),
            Some(Duration::from_millis(1_500))
        );
        assert_eq!(
            parse_timestamp("100:00:00,000"),
            Some(Duration::from_secs(360_000))
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("00:61:00,000"), None);
        assert_eq!(parse_timestamp("00:xx:01,000"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("00:00:01"), None);
    }

    #[test]
    fn test_parse_range() {
        let (start, end) = parse_range("00:01:00,000 --> 00:01:02,500").unwrap();
        assert_eq!(start, Duration::from_secs(60));
        assert_eq!(end, Duration::from_millis(62_500));
    }

    #[test]
    fn test_parse_range_with_position_hints() {
        let (start, _) = parse_range("00:00:05,000 --> 00:00:06,000 X1:40 X2:600").unwrap();
        assert_eq!(start, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_range_missing_separator() {
        assert!(parse_range("00:00:05,000 00:00:06,000").is_none());
        assert!(parse_range("00:00:05,000 -->").is_none());
    }

    #[test]
    fn test_elapsed_minutes() {
        assert_eq!(elapsed_minutes(Duration::from_secs(59)), 0);
        assert_eq!(elapsed_minutes(Duration::from_secs(61 * 60 + 5)), 61);
    }
}
