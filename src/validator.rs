use crate::boolean::{Truth, boolean_value};
use crate::calendar::matches_format;
use crate::email::email;
use crate::input::{Filter, Filtered, InputSource, RequestSource, input};
use crate::integer::integer_value;
use crate::ip::ip_with;
use crate::settings::Settings;
use crate::url::url;
use crate::value::Value;

/// Every validator behind one value, with formats and flags taken from
/// [`Settings`]. Permissive: integer and boolean checks accept anything
/// that converts into a [`Value`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    settings: Settings,
}

impl Validator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn email(&self, value: &str) -> bool {
        email(value)
    }
    pub fn ip(&self, value: &str) -> bool {
        ip_with(value, &self.settings.ip_flags())
    }
    pub fn integer<V: Into<Value>>(&self, value: V, min: Option<i64>, max: Option<i64>) -> bool {
        integer_value(&value.into(), min, max)
    }
    pub fn boolean<V: Into<Value>>(&self, value: V) -> Truth {
        boolean_value(&value.into())
    }
    pub fn url(&self, value: &str) -> bool {
        url(value, self.settings.url_flags())
    }
    pub fn date(&self, value: &str) -> bool {
        matches_format(value, &self.settings.date_format)
    }
    pub fn time(&self, value: &str) -> bool {
        matches_format(value, &self.settings.time_format)
    }
    pub fn date_time(&self, value: &str) -> bool {
        matches_format(value, &self.settings.date_time_format)
    }
    /// Fetch and filter a named input.
    pub fn input(&self, source: &dyn RequestSource, name: &str, from: InputSource, filter: &Filter) -> Filtered {
        input(source, name, from, filter)
    }
    /// A filter for `kind` that uses this validator's configured defaults.
    pub fn filter(&self, kind: FilterKind) -> Filter {
        match kind {
            FilterKind::Raw => Filter::Raw,
            FilterKind::Email => Filter::Email,
            FilterKind::Ip => Filter::Ip(self.settings.ip_flags()),
            FilterKind::Int => Filter::Int { min: None, max: None },
            FilterKind::Bool => Filter::Bool,
            FilterKind::Url => Filter::Url(self.settings.url_flags()),
            FilterKind::Date => Filter::Date(self.settings.date_format.clone()),
            FilterKind::Time => Filter::Time(self.settings.time_format.clone()),
            FilterKind::DateTime => Filter::DateTime(self.settings.date_time_format.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Raw,
    Email,
    Ip,
    Int,
    Bool,
    Url,
    Date,
    Time,
    DateTime,
}
