//! Humanized relative timestamps ("3 days ago", "in an hour").
//!
//! Thresholds follow the conventions users already see on fediverse web
//! clients: up to 44 seconds is "a few seconds", up to 44 minutes counts
//! minutes, under 22 hours counts hours, under 26 days counts days and under
//! 11 months counts months.

use chrono::{DateTime, NaiveDateTime, Utc};
use fedispace_core::error::{ErrorCode, FedispaceError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unparseable timestamp: {0}")]
    Unparseable(String),
}

impl FedispaceError for TimestampError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

/// The backend sends naive UTC timestamps; zoned RFC 3339 input is accepted too.
pub fn parse_backend_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Ok(zoned.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError::Unparseable(raw.to_string()))
}

pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - then).num_milliseconds();
    let phrase = humanize((elapsed_ms.unsigned_abs() as f64) / 1000.0);
    if elapsed_ms < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn humanize(total_seconds: f64) -> String {
    let seconds = total_seconds.round();
    let minutes = (total_seconds / 60.0).round();
    let hours = (total_seconds / 3_600.0).round();
    let days_exact = total_seconds / 86_400.0;
    let days = days_exact.round();
    // 400 Gregorian years hold 146097 days and 4800 months.
    let months_exact = days_exact * 4_800.0 / 146_097.0;
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if seconds <= 44.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}
