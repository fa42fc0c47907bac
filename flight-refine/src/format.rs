//! Display formatting for prices, times, durations and stops.
//!
//! Pure functions with no state. These produce the text the presentation
//! layer shows next to each offer and on the filter controls.

use std::fmt;

use crate::domain::{IsoDuration, LocalTimestamp, Segment};

/// Format an amount as en-US currency with no fraction digits.
///
/// Rounds half away from zero and groups thousands with commas. Common
/// currencies get their symbol; others are prefixed with their code.
///
/// # Examples
///
/// ```
/// use flight_refine::format::format_price;
///
/// assert_eq!(format_price(1234.5, "USD"), "$1,235");
/// assert_eq!(format_price(89.0, "EUR"), "€89");
/// assert_eq!(format_price(1500.0, "CHF"), "CHF 1,500");
/// ```
pub fn format_price(amount: f64, currency: &str) -> String {
    let prefix = match currency_symbol(currency) {
        Some(symbol) => symbol.to_string(),
        None => format!("{currency} "),
    };

    if amount.is_nan() {
        return format!("{prefix}NaN");
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    if magnitude.is_infinite() {
        return format!("{sign}{prefix}∞");
    }

    let digits = format!("{:.0}", magnitude.round());
    format!("{sign}{prefix}{}", group_thousands(&digits))
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CNY" => Some("CN¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "MXN" => Some("MX$"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Local clock time, e.g. "07:45".
pub fn format_time(ts: &LocalTimestamp) -> String {
    ts.local().format("%H:%M").to_string()
}

/// Short date, e.g. "Fri, Mar 15".
pub fn format_date(ts: &LocalTimestamp) -> String {
    ts.local().format("%a, %b %-d").to_string()
}

/// Long date, e.g. "Friday, March 15, 2024".
pub fn format_full_date(ts: &LocalTimestamp) -> String {
    ts.local().format("%A, %B %-d, %Y").to_string()
}

/// Compact duration, e.g. "2h 30m", "2h" or "45m".
///
/// Text that is not an ISO-8601 hour/minute duration is returned unchanged.
pub fn format_duration(duration: &IsoDuration) -> String {
    match duration.components() {
        Some((hours, minutes)) => hours_and_minutes(hours, minutes, ""),
        None => duration.as_str().to_string(),
    }
}

fn hours_and_minutes<H, M>(hours: H, minutes: M, suffix: &str) -> String
where
    H: fmt::Display + PartialEq + Default,
    M: fmt::Display + PartialEq + Default,
{
    if hours == H::default() {
        format!("{minutes}m{suffix}")
    } else if minutes == M::default() {
        format!("{hours}h{suffix}")
    } else {
        format!("{hours}h {minutes}m{suffix}")
    }
}

/// Stop count label: "Nonstop", "1 stop", "3 stops".
pub fn format_stops(stops: usize) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

/// Coarse part of the day a departure falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 to 20:59
    Evening,
    /// 21:00 to 04:59
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local hour of day, 0 to 23.
pub fn hour_of(ts: &LocalTimestamp) -> u32 {
    ts.hour()
}

/// Classify a timestamp by its local hour.
pub fn time_of_day(ts: &LocalTimestamp) -> TimeOfDay {
    match hour_of(ts) {
        5..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=20 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Sum of segment durations as canonical `PT{h}H{m}M` text.
///
/// Segments whose duration does not parse contribute nothing.
pub fn total_duration(segments: &[Segment]) -> IsoDuration {
    let total = segments
        .iter()
        .filter_map(|segment| segment.duration.minutes())
        .fold(0u64, u64::saturating_add);
    IsoDuration::from_minutes(total)
}

/// Connection time between an arrival and the next departure,
/// e.g. "1h 5m layover".
pub fn layover_duration(arrival: &LocalTimestamp, departure: &LocalTimestamp) -> String {
    let minutes = arrival.minutes_until(departure);
    let hours = minutes.div_euclid(60);
    let mins = minutes % 60;
    hours_and_minutes(hours, mins, " layover")
}
