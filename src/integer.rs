//! Base-10 integer validation with optional inclusive bounds.

use tracing::trace;

use crate::value::Value;

/// True iff `value` is a decimal integer literal within `[min, max]`.
///
/// Surrounding ASCII whitespace is ignored. A single leading `+` or `-` is
/// allowed, leading zeros are not (`"0"` and `"-0"` are fine, `"042"` is
/// not). When `min > max` nothing is in range.
pub fn integer(value: &str, min: Option<i64>, max: Option<i64>) -> bool {
    match parse_integer(value) {
        Some(n) => in_range(n, min, max),
        None => {
            trace!(value, "not an integer");
            false
        }
    }
}

/// Coercing variant of [`integer`].
pub fn integer_value(value: &Value, min: Option<i64>, max: Option<i64>) -> bool {
    match value {
        Value::Int(n) => in_range(*n, min, max),
        other => integer(&other.coerce(), min, max),
    }
}

/// Parse the literal the way [`integer`] accepts it.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_matches(is_space);
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let bytes = digits.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    // accumulate negatively so i64::MIN fits
    let mut n: i64 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        n = n.checked_mul(10)?.checked_sub((byte - b'0') as i64)?;
    }
    if negative { Some(n) } else { n.checked_neg() }
}

pub(crate) fn in_range(n: i64, min: Option<i64>, max: Option<i64>) -> bool {
    let ok = min.is_none_or(|min| n >= min) && max.is_none_or(|max| n <= max);
    if !ok {
        trace!(n, ?min, ?max, "integer out of range");
    }
    ok
}

pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b')
}
