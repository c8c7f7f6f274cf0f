use serde::*;

/// Time of day expressed as fractional hours.
/// 10:30 is represented as 10.5 hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ClockTime(qtty::Hours);

/// Error returned when a time string cannot be parsed.
///
/// The catalog parser treats this as fatal for the containing record only,
/// never for the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed time text: {text:?}")]
pub struct MalformedTime {
    /// The offending input text.
    pub text: String,
}

impl ClockTime {
    /// Create a new clock time from fractional hours.
    pub fn new<V: Into<qtty::Hours>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw value as f64 hours.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Parse an "HH:MM" string into a clock time.
    ///
    /// The minute part is optional and defaults to 0, so `"8"` parses the
    /// same as `"8:00"`. Both parts must be unsigned integers.
    ///
    /// # Errors
    /// Returns [`MalformedTime`] when the hour part is missing or either
    /// part fails to parse as an integer.
    pub fn parse(text: &str) -> Result<Self, MalformedTime> {
        let malformed = || MalformedTime {
            text: text.to_string(),
        };

        let mut parts = text.trim().splitn(2, ':');
        let hours: u32 = parts
            .next()
            .unwrap_or("")
            .trim()
            .parse()
            .map_err(|_| malformed())?;
        let minutes: u32 = match parts.next() {
            Some(m) => m.trim().parse().map_err(|_| malformed())?,
            None => 0,
        };

        Ok(Self::new(hours as f64 + minutes as f64 / 60.0))
    }

    /// Render as zero-padded "HH:MM".
    pub fn hhmm(&self) -> String {
        let total_minutes = (self.value() * 60.0).round() as u32;
        format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

impl From<f64> for ClockTime {
    fn from(v: f64) -> Self {
        ClockTime::new(v)
    }
}

/// Half-open interval overlap predicate.
///
/// True iff `[start_a, end_a)` and `[start_b, end_b)` share any instant.
/// Back-to-back ranges (end of one equals start of the other) do not
/// overlap. Every conflict and layout decision in the crate goes through
/// this predicate.
pub fn overlaps(start_a: ClockTime, end_a: ClockTime, start_b: ClockTime, end_b: ClockTime) -> bool {
    start_a.value() < end_b.value() && start_b.value() < end_a.value()
}

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian digits for user-facing labels.
pub fn localize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
