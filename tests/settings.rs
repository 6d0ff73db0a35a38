use std::io::Write;

use semval::{IpFamily, SemvalError, Settings, Truth, Validator};
use semval::validator::FilterKind;
use semval::{Filter, UrlFlags};

fn settings_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.date_format, "Y-m-d");
    assert_eq!(settings.time_format, "H:i");
    assert_eq!(settings.date_time_format, "Y-m-d\\TH:i:sP");
    assert_eq!(settings.ip_family, IpFamily::Any);
    assert_eq!(settings.url_flags(), UrlFlags::default());
}

#[test]
fn file_overrides_defaults() {
    let file = settings_file(
        r#"
        date_format = "d/m/Y"
        ip_family = "v4"
        require_path = true
        "#,
    );
    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.date_format, "d/m/Y");
    assert_eq!(settings.time_format, "H:i", "untouched keys keep their default");
    assert_eq!(settings.ip_family, IpFamily::V4);
    assert!(settings.require_path);
    assert!(!settings.require_query);
}

#[test]
fn bad_pattern_in_file() {
    let file = settings_file(r#"time_format = "H:i T""#);
    let err = Settings::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, SemvalError::Pattern { position: 4, .. }), "{err}");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, SemvalError::Config(_)), "{err}");
}

#[test]
fn validator_applies_settings() {
    let file = settings_file(
        r#"
        date_format = "d.m.Y"
        ip_family = "v6"
        no_reserved_range = true
        require_query = true
        "#,
    );
    let validator = Validator::new(Settings::load(Some(file.path())).unwrap());
    assert!(validator.date("17.09.2025"));
    assert!(!validator.date("2025-09-17"));
    assert!(validator.time("23:45"));
    assert!(validator.date_time("2025-09-17T23:45:00+00:00"));
    assert!(!validator.ip("8.8.8.8"));
    assert!(!validator.ip("::1"));
    assert!(validator.ip("2001:4860::8888"));
    assert!(!validator.url("https://example.com/"));
    assert!(validator.url("https://example.com/?q=1"));
    assert_eq!(validator.filter(FilterKind::Date), Filter::Date(String::from("d.m.Y")));
}

#[test]
fn default_validator_is_permissive() {
    let validator = Validator::default();
    assert!(validator.email("hi@example.com"));
    assert!(validator.ip("127.0.0.1"));
    assert!(validator.integer(42i64, Some(1), Some(100)));
    assert!(validator.integer("42", Some(1), Some(100)));
    assert!(!validator.integer(200i64, Some(1), Some(100)));
    assert!(!validator.integer(None::<i64>, None, None));
    assert_eq!(validator.boolean("yes"), Truth::True);
    assert_eq!(validator.boolean(false), Truth::False);
    assert_eq!(validator.boolean(1i64), Truth::True);
    assert_eq!(validator.boolean("maybe"), Truth::Indeterminate);
    assert!(validator.url("https://example.com"));
    assert!(validator.date("2025-09-17"));
    assert!(!validator.time("25:61"));
}
