//! Date, time and date-time validation by format pattern.
//!
//! A value is valid only if all three hold:
//! 1. the pattern extracts fields from the whole value,
//! 2. the fields resolve to a real moment (month 1-12, day within the month
//!    of that year, hour 0-23, minute and second 0-59, offset under a day),
//! 3. rendering that moment with the same pattern gives back the value.
//!
//! The third step is what rejects non-canonical spellings such as
//! `2025-9-17` for `Y-m-d`.
//!
//! Fields the pattern does not mention take their value from the Unix
//! epoch, never from the clock.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use tracing::trace;

use crate::pattern::{ATOM, Fields, Pattern};

pub const DATE_FORMAT: &str = "Y-m-d";
pub const TIME_FORMAT: &str = "H:i";
pub const DATE_TIME_FORMAT: &str = ATOM;

const EPOCH_YEAR: i32 = 1970;

/// True iff `value` is a calendar date written exactly as `format`.
pub fn date(value: &str, format: &str) -> bool {
    matches_format(value, format)
}

/// True iff `value` is a time of day written exactly as `format`.
pub fn time(value: &str, format: &str) -> bool {
    matches_format(value, format)
}

/// True iff `value` is a date-time written exactly as `format`.
pub fn date_time(value: &str, format: &str) -> bool {
    matches_format(value, format)
}

/// Shared strictness rule behind [`date`], [`time`] and [`date_time`].
/// A format that does not compile matches nothing.
pub fn matches_format(value: &str, format: &str) -> bool {
    match Pattern::compile(format) {
        Ok(pattern) => matches_pattern(value, &pattern),
        Err(_) => false,
    }
}

/// [`matches_format`] for an already compiled pattern.
pub fn matches_pattern(value: &str, pattern: &Pattern) -> bool {
    let Some(fields) = pattern.extract(value) else {
        trace!(value, format = pattern.as_str(), "value does not fit format");
        return false;
    };
    let Some(moment) = resolve(&fields) else {
        trace!(value, ?fields, "fields out of calendar range");
        return false;
    };
    let rendered = pattern.render(&moment);
    if rendered != value {
        trace!(value, %rendered, "value is not in canonical form");
        return false;
    }
    true
}

/// Turn extracted fields into a moment, or `None` if any of them is out of
/// range. A Unix timestamp overrides every other date and time field.
pub fn resolve(fields: &Fields) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(fields.offset.unwrap_or(0))?;
    if let Some(timestamp) = fields.timestamp {
        return DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&offset));
    }
    let date = NaiveDate::from_ymd_opt(
        fields.year.unwrap_or(EPOCH_YEAR),
        fields.month.unwrap_or(1),
        fields.day.unwrap_or(1),
    )?;
    if fields.weekday.is_some_and(|weekday| weekday != date.weekday()) {
        return None;
    }
    let time = NaiveTime::from_hms_micro_opt(
        hour(fields)?,
        fields.minute.unwrap_or(0),
        fields.second.unwrap_or(0),
        fields.micro.unwrap_or(0),
    )?;
    offset.from_local_datetime(&date.and_time(time)).single()
}

// 12-hour clock values are 1-12; a meridian turns them (or a 24-hour
// value up to 12) into 0-23
fn hour(fields: &Fields) -> Option<u32> {
    let hour = match (fields.hour12, fields.hour) {
        (Some(h), _) if !(1..=12).contains(&h) => return None,
        (Some(h), _) | (None, Some(h)) => h,
        (None, None) => 0,
    };
    match fields.pm {
        None => Some(hour),
        Some(_) if hour > 12 => None,
        Some(false) => Some(hour % 12),
        Some(true) => Some(hour % 12 + 12),
    }
}
