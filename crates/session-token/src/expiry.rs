//! Parsing of token lifetimes such as `"7d"`, `"1h"` or `"2 days"`.
//!
//! Spans with a unit are parsed by [`humantime::parse_duration`], so compound
//! forms like `"1h 30m"` work too. Two forms humantime rejects are handled
//! before it:
//!
//! - a bare number is a count of **milliseconds** (`"120000"` is two minutes)
//! - a decimal with a single unit (`"1.5h"`, `".5d"`)
//!
//! A leading `-` negates the span. The JWT `exp` claim has second
//! granularity, so `exp = floor(iat + millis / 1000)`; sub-second and
//! negative lifetimes are accepted and yield a token that is already expired.

use crate::errors::IssueError;
use chrono::Duration;

/// Upper bound on the magnitude of a token lifetime (1000 years). Keeps
/// `iat + lifetime` far away from `i64` overflow.
pub const MAX_EXPIRES_IN_SECS: i64 = 31_557_600_000;

/// Parse a lifetime string into whole seconds, rounding toward negative
/// infinity.
///
/// # Errors
///
/// Returns [`IssueError::InvalidExpiry`] when the string is empty, has an
/// unknown unit, is not a number, or its magnitude exceeds
/// [`MAX_EXPIRES_IN_SECS`].
pub fn parse_expires_in(raw: &str) -> Result<Duration, IssueError> {
    let invalid = || {
        tracing::debug!(target: "session_token.expiry", input = %raw, "Unparseable token lifetime");
        IssueError::InvalidExpiry(format!("{raw:?}"))
    };

    let input = raw.trim();
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, input),
    };

    let millis = span_millis(body).ok_or_else(invalid)?;
    let millis = if negative { -millis } else { millis };
    let secs = (millis / 1000.0).floor();

    #[allow(clippy::cast_precision_loss)]
    let max_secs = MAX_EXPIRES_IN_SECS as f64;
    if !secs.is_finite() || secs.abs() > max_secs {
        return Err(invalid());
    }

    // Bounded by MAX_EXPIRES_IN_SECS in both directions
    #[allow(clippy::cast_possible_truncation)]
    let secs = secs as i64;
    Ok(Duration::seconds(secs))
}

/// Length of an unsigned span in milliseconds.
fn span_millis(body: &str) -> Option<f64> {
    let split = body
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(body.len());
    let (number, unit) = body.split_at(split);
    if number.is_empty() {
        return None;
    }

    if unit.is_empty() {
        return number.parse::<f64>().ok();
    }

    if number.contains('.') {
        let unit = unit.trim_start();
        if !unit.chars().all(char::is_alphabetic) {
            return None;
        }
        let value: f64 = number.parse().ok()?;
        let unit_len = humantime::parse_duration(&format!("1{unit}")).ok()?;
        return Some(value * unit_len.as_secs_f64() * 1000.0);
    }

    humantime::parse_duration(body)
        .ok()
        .map(|d| d.as_secs_f64() * 1000.0)
}
