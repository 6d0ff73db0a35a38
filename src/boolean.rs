//! Tri-state boolean token classification.

use std::fmt;

use serde::Serialize;

use crate::integer::is_space;
use crate::value::Value;

const TRUTHY: [&str; 4] = ["1", "true", "on", "yes"];
const FALSY: [&str; 5] = ["0", "false", "off", "no", ""];

/// Outcome of [`boolean`]. `Indeterminate` means the token was not
/// recognized, which callers must keep apart from an explicit `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Truth {
    True,
    False,
    Indeterminate,
}

impl Truth {
    pub fn is_determinate(self) -> bool {
        self != Truth::Indeterminate
    }
    pub fn as_option(self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Indeterminate => None,
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b { Truth::True } else { Truth::False }
    }
}
impl From<Truth> for Option<bool> {
    fn from(t: Truth) -> Self {
        t.as_option()
    }
}
impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Truth::True => write!(f, "true"),
            Truth::False => write!(f, "false"),
            Truth::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Classify `value` against the fixed, case-insensitive token vocabulary.
pub fn boolean(value: &str) -> Truth {
    let token = value.trim_matches(is_space);
    if TRUTHY.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Truth::True
    } else if FALSY.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Truth::False
    } else {
        tracing::trace!(value, "unrecognized boolean token");
        Truth::Indeterminate
    }
}

/// Coercing variant of [`boolean`].
pub fn boolean_value(value: &Value) -> Truth {
    match value {
        Value::Bool(b) => Truth::from(*b),
        Value::Null => Truth::False,
        other => boolean(&other.coerce()),
    }
}
