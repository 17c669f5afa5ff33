//! Refresh interval parsing and countdown formatting
//!
//! Intervals are written as colon-delimited whole numbers: `H:M:S`, `M:S`
//! or `S`. Fewer parts fill the least-significant units first, so `45` is
//! 45 seconds and `30:00` is thirty minutes. Components are not range
//! checked: `90:00` is ninety minutes.
//!
//! Durations are always rendered as `H:MM:SS` with whole-second precision.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;
use thiserror::Error;

/// Errors while parsing an interval string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("invalid interval '{input}': expected H:M:S, M:S or S")]
    InvalidFormat { input: String },
}

/// Parse an interval string into a whole-second duration.
///
/// Accepts 1 to 3 colon-separated non-negative integers, each optionally
/// prefixed with `+`. Negative signs, empty components, fractions and
/// anything outside the range of a signed time delta are rejected. A zero
/// duration is valid.
pub fn parse_interval(text: &str) -> Result<Duration, IntervalError> {
    let invalid = || IntervalError::InvalidFormat {
        input: text.to_string(),
    };

    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    for part in parts {
        let value = parse_component(part).ok_or_else(invalid)?;
        total = total
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(invalid)?;
    }

    // Must be addable to a timestamp later on
    i64::try_from(total)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(invalid)?;

    Ok(Duration::from_secs(total))
}

/// A single component: digits with at most one leading `+`, surrounding
/// spaces allowed.
fn parse_component(part: &str) -> Option<u64> {
    let part = part.trim();
    let part = part.strip_prefix('+').unwrap_or(part);
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Render a duration as `H:MM:SS`. Sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Render a signed countdown, clamping anything in the past to `0:00:00`.
pub fn format_remaining(delta: TimeDelta) -> String {
    let secs = delta.num_seconds().max(0) as u64;
    format_duration(Duration::from_secs(secs))
}

/// A validated refresh interval.
///
/// Keeps the text the user typed (trimmed) next to its parsed duration, so
/// an entry holding one can never carry an unparseable interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshInterval {
    text: String,
    duration: Duration,
}

impl RefreshInterval {
    pub fn parse(text: &str) -> Result<Self, IntervalError> {
        let text = text.trim();
        let duration = parse_interval(text)?;
        Ok(Self {
            text: text.to_string(),
            duration,
        })
    }

    /// The interval as entered, e.g. `00:45:00`
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The interval as a signed delta for timestamp arithmetic.
    pub fn as_delta(&self) -> TimeDelta {
        // Range was checked in parse_interval
        TimeDelta::try_seconds(self.duration.as_secs() as i64).unwrap_or(TimeDelta::MAX)
    }

    /// Canonical `H:MM:SS` rendering
    pub fn canonical(&self) -> String {
        format_duration(self.duration)
    }
}

impl FromStr for RefreshInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
