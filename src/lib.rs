//! Semval – strict, deterministic format validators.
//!
//! Every check is a pure function from an input string to a verdict:
//! * [`email()`] – addr-spec email address (hostname or bracketed IP-literal domain).
//! * [`ip()`] / [`ip_with()`] – IPv4 dotted-quad or IPv6 colon-hex, optionally
//!   restricted to one family and excluding private or reserved ranges.
//! * [`integer()`] – base-10 integer literal within optional inclusive bounds.
//! * [`boolean()`] – tri-state token parse returning a [`Truth`].
//! * [`url()`] – URL with a scheme, optionally requiring a path or a query.
//! * [`date()`], [`time()`], [`date_time()`] – calendar values in a given format.
//!
//! No validator panics or errors on malformed input; bad input is simply
//! `false` (or [`Truth::Indeterminate`]).
//!
//! ## Modules
//! * [`pattern`] – The date/time format mini-language (`Y-m-d`, `H:i`, ...).
//! * [`calendar`] – Round-trip date/time validation on top of [`pattern`].
//! * [`value`] – [`Value`], the loosely typed input of the permissive variants.
//! * [`input`](mod@input) – Filtering named inputs fetched from a [`RequestSource`].
//! * [`settings`] – Configurable defaults, loaded with the `config` crate.
//! * [`validator`] – The [`Validator`] facade applying those defaults.
//!
//! ## Calendar strictness
//! `date`, `time` and `date_time` accept a value only if rendering the parsed
//! moment with the same format reproduces the value byte for byte. This
//! rejects impossible dates (`2025-02-30`) as well as non-canonical
//! spellings (`2025-9-17` for `Y-m-d`).
//!
//! ## Quick Start
//! ```
//! use semval::{Truth, boolean, date, email, integer, ip, IpFamily};
//! assert!(email("hi@example.com"));
//! assert!(ip("::1", IpFamily::Any));
//! assert!(!ip("1.2.3.4", IpFamily::V6));
//! assert!(integer("42", Some(1), Some(100)));
//! assert_eq!(boolean("maybe"), Truth::Indeterminate);
//! assert!(date("2025-09-17", semval::DATE_FORMAT));
//! assert!(!date("2025-02-30", semval::DATE_FORMAT));
//! ```

pub mod boolean;
pub mod calendar;
pub mod email;
pub mod error;
pub mod input;
pub mod integer;
pub mod ip;
pub mod pattern;
pub mod settings;
pub mod url;
pub mod validator;
pub mod value;

pub use boolean::{Truth, boolean, boolean_value};
pub use calendar::{DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT, date, date_time, time};
pub use email::email;
pub use error::{Result, SemvalError};
pub use input::{Filter, Filtered, InputSource, MapSource, RequestSource, input};
pub use integer::{integer, integer_value};
pub use ip::{IpFamily, IpFlags, ip, ip_with};
pub use pattern::Pattern;
pub use settings::Settings;
pub use url::{UrlFlags, url};
pub use validator::{FilterKind, Validator};
pub use value::Value;
