//! Human-friendly dates.
//!
//! [`parse_human`] turns phrases such as `tomorrow`, `in 3 days` or
//! `5 days ago` into absolute timestamps; [`format_human`] renders a timestamp
//! relative to now (`in 2 days`, `3 hours ago`). Both take `now` explicitly so
//! callers and tests control the reference point.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use tasks::libs::human_time::{format_human, parse_human};
//!
//! let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
//! assert_eq!(parse_human("in 7 days", now).unwrap(), now + Duration::days(7));
//! assert_eq!(format_human(now - Duration::hours(3), now), "3 hours ago");
//! ```

use chrono::{DateTime, Duration, Months, Utc};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HumanTimeError {
    #[error("unable to parse time string: {0}")]
    Unrecognized(String),

    #[error("time out of range: {0}")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn parse(s: &str) -> Option<Unit> {
        match s {
            "second" => Some(Unit::Second),
            "minute" => Some(Unit::Minute),
            "hour" => Some(Unit::Hour),
            "day" => Some(Unit::Day),
            "week" => Some(Unit::Week),
            "month" => Some(Unit::Month),
            "year" => Some(Unit::Year),
            _ => None,
        }
    }
}

static RELATIVE: OnceLock<Regex> = OnceLock::new();

fn relative_pattern() -> &'static Regex {
    RELATIVE.get_or_init(|| {
        Regex::new(r"^(?:in\s+(?P<ahead>\d+)\s+(?P<ahead_unit>second|minute|hour|day|week|month|year)s?|(?P<ago>\d+)\s+(?P<ago_unit>second|minute|hour|day|week|month|year)s?\s+ago)$")
            .expect("relative time pattern is valid")
    })
}

/// Resolves a human date phrase against `now`.
///
/// Accepts `now`, `today`, `tomorrow`, `yesterday`, `in N <unit>`,
/// `N <unit> ago` (units from seconds to years, optional plural `s`) and raw
/// RFC 3339 timestamps. Matching is case-insensitive.
pub fn parse_human(phrase: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, HumanTimeError> {
    let raw = phrase.trim();
    let phrase = raw.to_lowercase();

    match phrase.as_str() {
        "now" | "today" => return Ok(now),
        "tomorrow" => return Ok(now + Duration::days(1)),
        "yesterday" => return Ok(now - Duration::days(1)),
        _ => {}
    }

    if let Some(caps) = relative_pattern().captures(&phrase) {
        let (quantity, unit, sign) = match (caps.name("ahead"), caps.name("ahead_unit")) {
            (Some(q), Some(u)) => (q.as_str(), u.as_str(), 1),
            _ => (&caps["ago"], caps.name("ago_unit").map_or("", |u| u.as_str()), -1),
        };

        let quantity: u32 = quantity.parse().map_err(|_| HumanTimeError::OutOfRange(phrase.clone()))?;
        let unit = Unit::parse(unit).ok_or_else(|| HumanTimeError::Unrecognized(phrase.clone()))?;
        return shift(now, quantity, unit, sign).ok_or(HumanTimeError::OutOfRange(phrase));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| HumanTimeError::Unrecognized(phrase))
}

fn shift(now: DateTime<Utc>, quantity: u32, unit: Unit, sign: i64) -> Option<DateTime<Utc>> {
    let fixed = |seconds_per_unit: i64| {
        let delta = Duration::try_seconds(i64::from(quantity).checked_mul(seconds_per_unit)? * sign)?;
        now.checked_add_signed(delta)
    };
    let calendar = |months: u32| {
        if sign > 0 {
            now.checked_add_months(Months::new(months))
        } else {
            now.checked_sub_months(Months::new(months))
        }
    };

    match unit {
        Unit::Second => fixed(1),
        Unit::Minute => fixed(60),
        Unit::Hour => fixed(3_600),
        Unit::Day => fixed(86_400),
        Unit::Week => fixed(7 * 86_400),
        Unit::Month => calendar(quantity),
        Unit::Year => calendar(quantity.checked_mul(12)?),
    }
}

/// Renders `t` relative to `now`, e.g. `in 2 days` or `3 hours ago`.
pub fn format_human(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = t.signed_duration_since(now);
    let seconds = delta.num_seconds().unsigned_abs() as f64;

    if seconds < 45.0 {
        return "just now".to_string();
    }

    let amount = |n: f64, unit: &str| {
        let n = n.round().max(1.0) as u64;
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let text = if minutes.round() < 45.0 {
        amount(minutes, "minute")
    } else if hours.round() < 22.0 {
        amount(hours, "hour")
    } else if days.round() < 26.0 {
        amount(days, "day")
    } else if (days / 30.44).round() < 11.0 {
        amount(days / 30.44, "month")
    } else {
        amount(days / 365.25, "year")
    };

    if delta.num_seconds() > 0 {
        format!("in {}", text)
    } else {
        format!("{} ago", text)
    }
}
