//! Timestamp and duration handling for flight data.
//!
//! The search API gives departure and arrival times as ISO-8601 local
//! timestamps without an offset (the offset is implicitly that of the
//! airport), and durations as ISO-8601 duration text such as "PT2H30M".
//! Both keep their original text: several orderings are defined on the
//! raw text rather than on the parsed value.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {text:?}: {reason}")]
pub struct TimestampError {
    text: String,
    reason: &'static str,
}

/// Accepted layouts, most specific first.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// An airport-local timestamp.
///
/// # Examples
///
/// ```
/// use flight_refine::domain::LocalTimestamp;
///
/// let ts = LocalTimestamp::parse("2024-03-15T07:45:00").unwrap();
/// assert_eq!(ts.hour(), 7);
/// assert_eq!(ts.as_str(), "2024-03-15T07:45:00");
///
/// // Minute precision is accepted
/// assert!(LocalTimestamp::parse("2024-03-15T07:45").is_ok());
///
/// // Dates alone are not
/// assert!(LocalTimestamp::parse("2024-03-15").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LocalTimestamp {
    raw: String,
    local: NaiveDateTime,
}

impl LocalTimestamp {
    /// Parse an ISO-8601 local timestamp.
    ///
    /// A trailing `Z` or numeric offset is tolerated and ignored; the
    /// wall-clock reading is what matters.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let wall_clock = strip_offset(s);

        let local = TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(wall_clock, format).ok())
            .ok_or_else(|| TimestampError {
                text: s.to_string(),
                reason: "expected YYYY-MM-DDTHH:MM[:SS]",
            })?;

        Ok(Self {
            raw: s.to_string(),
            local,
        })
    }

    /// Returns the original text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed local date and time.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// Returns the local hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Whole minutes from `self` until `later`; negative if `later` is earlier.
    pub fn minutes_until(&self, later: &LocalTimestamp) -> i64 {
        later.local.signed_duration_since(self.local).num_minutes()
    }
}

/// Drop a trailing `Z` or `±HH:MM` offset from a timestamp.
fn strip_offset(s: &str) -> &str {
    if let Some(rest) = s.strip_suffix('Z') {
        return rest;
    }
    // An offset starts after the time part, so look only past the 'T'
    if let Some(t_pos) = s.find('T') {
        if let Some(sign_pos) = s[t_pos..].rfind(['+', '-']) {
            return &s[..t_pos + sign_pos];
        }
    }
    s
}

impl fmt::Debug for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalTimestamp({})", self.raw)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// ISO-8601 duration text, e.g. "PT2H30M".
///
/// Only the hour and minute components are interpreted. The text is kept
/// as received, including text that does not parse.
///
/// # Examples
///
/// ```
/// use flight_refine::domain::IsoDuration;
///
/// assert_eq!(IsoDuration::new("PT2H30M").minutes(), Some(150));
/// assert_eq!(IsoDuration::new("PT45M").minutes(), Some(45));
/// assert_eq!(IsoDuration::new("PT10H").minutes(), Some(600));
/// assert_eq!(IsoDuration::new("garbage").minutes(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration(String);

impl IsoDuration {
    /// Wrap duration text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build the canonical `PT{h}H{m}M` text for a number of minutes.
    pub fn from_minutes(total: u64) -> Self {
        Self(format!("PT{}H{}M", total / 60, total % 60))
    }

    /// Returns the original text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hour and minute components.
    ///
    /// Matches the first `PT` in the text, followed by an optional `<n>H`
    /// and an optional `<n>M`; missing components are zero. Returns `None`
    /// when the text contains no `PT`.
    pub fn components(&self) -> Option<(u64, u64)> {
        let start = self.0.find("PT")? + 2;
        let rest = &self.0[start..];

        let (hours, rest) = match take_component(rest, 'H') {
            Some((hours, after)) => (hours, after),
            None => (0, rest),
        };
        let minutes = take_component(rest, 'M').map_or(0, |(minutes, _)| minutes);

        Some((hours, minutes))
    }

    /// Total duration in minutes.
    pub fn minutes(&self) -> Option<u64> {
        self.components()
            .map(|(hours, minutes)| hours.saturating_mul(60).saturating_add(minutes))
    }
}

/// Take a run of digits followed by `unit` from the front of `s`.
fn take_component(s: &str, unit: char) -> Option<(u64, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = s[digits..].strip_prefix(unit)?;
    let value = s[..digits].parse::<u64>().unwrap_or(u64::MAX);
    Some((value, after))
}

impl fmt::Debug for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsoDuration({})", self.0)
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
