//! Named input retrieval, delegated to a caller-supplied [`RequestSource`].
//!
//! The crate never reads request data itself. A `RequestSource` hands over
//! raw values and [`input`] runs one validator over them.

use std::collections::HashMap;

use crate::boolean::boolean_value;
use crate::calendar::matches_format;
use crate::email::email;
use crate::integer::{in_range, parse_integer};
use crate::ip::{IpFlags, ip_with};
use crate::url::{UrlFlags, url};
use crate::value::Value;

/// Where a named input lives in the host request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Query,
    Body,
    Cookie,
    Server,
    Env,
}

pub trait RequestSource {
    fn get(&self, source: InputSource, name: &str) -> Option<Value>;
}

impl<F> RequestSource for F
where
    F: Fn(InputSource, &str) -> Option<Value>,
{
    fn get(&self, source: InputSource, name: &str) -> Option<Value> {
        self(source, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Pass the value through untouched.
    #[default]
    Raw,
    Email,
    Ip(IpFlags),
    Int { min: Option<i64>, max: Option<i64> },
    Bool,
    Url(UrlFlags),
    Date(String),
    Time(String),
    DateTime(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filtered {
    /// The source has no value under that name.
    Missing,
    /// A value was found but did not pass the filter.
    Invalid,
    Valid(Value),
}

impl Filtered {
    pub fn valid(self) -> Option<Value> {
        match self {
            Filtered::Valid(value) => Some(value),
            _ => None,
        }
    }
}

/// Fetch `name` from `from` and run `filter` over it.
pub fn input(source: &dyn RequestSource, name: &str, from: InputSource, filter: &Filter) -> Filtered {
    match source.get(from, name) {
        Some(value) => apply(value, filter),
        None => {
            tracing::trace!(name, ?from, "input missing");
            Filtered::Missing
        }
    }
}

/// Run `filter` over a value that is already at hand.
///
/// `Int` converts to [`Value::Int`] and `Bool` to [`Value::Bool`]; text
/// filters hand back the coerced text.
pub fn apply(value: Value, filter: &Filter) -> Filtered {
    match filter {
        Filter::Raw => Filtered::Valid(value),
        Filter::Int { min, max } => {
            let n = match value {
                Value::Int(n) => Some(n),
                other => parse_integer(&other.coerce()),
            };
            match n {
                Some(n) if in_range(n, *min, *max) => Filtered::Valid(Value::Int(n)),
                _ => Filtered::Invalid,
            }
        }
        Filter::Bool => match boolean_value(&value).as_option() {
            Some(b) => Filtered::Valid(Value::Bool(b)),
            None => Filtered::Invalid,
        },
        Filter::Email => text_filter(value, email),
        Filter::Ip(flags) => text_filter(value, |text| ip_with(text, flags)),
        Filter::Url(flags) => text_filter(value, |text| url(text, *flags)),
        Filter::Date(format) | Filter::Time(format) | Filter::DateTime(format) => {
            text_filter(value, |text| matches_format(text, format))
        }
    }
}

fn text_filter(value: Value, check: impl Fn(&str) -> bool) -> Filtered {
    let text = value.coerce();
    if check(&text) { Filtered::Valid(Value::Str(text)) } else { Filtered::Invalid }
}

/// In-memory [`RequestSource`].
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<(InputSource, String), Value>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, source: InputSource, name: &str, value: impl Into<Value>) -> Self {
        self.insert(source, name, value);
        self
    }
    pub fn insert(&mut self, source: InputSource, name: &str, value: impl Into<Value>) {
        self.values.insert((source, String::from(name)), value.into());
    }
}

impl RequestSource for MapSource {
    fn get(&self, source: InputSource, name: &str) -> Option<Value> {
        self.values.get(&(source, String::from(name))).cloned()
    }
}
