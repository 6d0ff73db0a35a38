use semval::{Filter, Filtered, InputSource, IpFamily, IpFlags, MapSource, RequestSource, UrlFlags, Value, input};
use semval::input::apply;

fn setup() -> MapSource {
    MapSource::new()
        .with(InputSource::Query, "age", "42")
        .with(InputSource::Query, "debug", "yes")
        .with(InputSource::Query, "mode", "sometimes")
        .with(InputSource::Body, "email", "hi@example.com")
        .with(InputSource::Body, "born", "2025-02-30")
        .with(InputSource::Cookie, "count", 7i64)
        .with(InputSource::Server, "remote", "10.0.0.1")
}

#[test]
fn missing_inputs() {
    let source = setup();
    assert_eq!(input(&source, "nope", InputSource::Query, &Filter::Raw), Filtered::Missing);
    // right name, wrong place
    assert_eq!(input(&source, "age", InputSource::Body, &Filter::Raw), Filtered::Missing);
}

#[test]
fn raw_passthrough() {
    let source = setup();
    assert_eq!(input(&source, "age", InputSource::Query, &Filter::Raw), Filtered::Valid(Value::from("42")));
    assert_eq!(input(&source, "count", InputSource::Cookie, &Filter::default()), Filtered::Valid(Value::Int(7)));
}

#[test]
fn integers_are_converted() {
    let source = setup();
    let bounded = Filter::Int { min: Some(1), max: Some(100) };
    assert_eq!(input(&source, "age", InputSource::Query, &bounded), Filtered::Valid(Value::Int(42)));
    assert_eq!(input(&source, "count", InputSource::Cookie, &bounded), Filtered::Valid(Value::Int(7)));
    let narrow = Filter::Int { min: Some(50), max: None };
    assert_eq!(input(&source, "age", InputSource::Query, &narrow), Filtered::Invalid);
    assert_eq!(input(&source, "mode", InputSource::Query, &bounded), Filtered::Invalid);
}

#[test]
fn booleans_keep_indeterminate_apart() {
    let source = setup();
    assert_eq!(input(&source, "debug", InputSource::Query, &Filter::Bool), Filtered::Valid(Value::Bool(true)));
    assert_eq!(input(&source, "mode", InputSource::Query, &Filter::Bool), Filtered::Invalid);
    assert_eq!(input(&source, "absent", InputSource::Query, &Filter::Bool), Filtered::Missing);
    assert_eq!(apply(Value::from("off"), &Filter::Bool), Filtered::Valid(Value::Bool(false)));
}

#[test]
fn text_filters() {
    let source = setup();
    assert_eq!(
        input(&source, "email", InputSource::Body, &Filter::Email),
        Filtered::Valid(Value::from("hi@example.com"))
    );
    assert_eq!(input(&source, "born", InputSource::Body, &Filter::Date("Y-m-d".into())), Filtered::Invalid);
    let public_only = Filter::Ip(IpFlags::new(IpFamily::Any).no_private_range());
    assert_eq!(input(&source, "remote", InputSource::Server, &public_only), Filtered::Invalid);
    assert!(matches!(input(&source, "remote", InputSource::Server, &Filter::Ip(IpFlags::default())), Filtered::Valid(_)));
    assert_eq!(apply(Value::from("https://example.com/"), &Filter::Url(UrlFlags::default().require_path())).valid(), Some(Value::from("https://example.com/")));
    assert_eq!(apply(Value::from("23:45"), &Filter::Time("H:i".into())).valid(), Some(Value::from("23:45")));
}

#[test]
fn closures_are_sources() {
    let source = |from: InputSource, name: &str| {
        (from == InputSource::Env && name == "PORT").then(|| Value::from("8080"))
    };
    assert_eq!(source.get(InputSource::Env, "PORT"), Some(Value::from("8080")));
    let port = Filter::Int { min: Some(1), max: Some(65535) };
    assert_eq!(input(&source, "PORT", InputSource::Env, &port), Filtered::Valid(Value::Int(8080)));
    assert_eq!(input(&source, "PORT", InputSource::Query, &port), Filtered::Missing);
}
