//! Environment overrides live in their own test binary so the variables
//! never leak into other tests.

use semval::{Settings, Validator};

#[test]
fn environment_overrides() {
    // SAFETY: this binary runs a single test
    unsafe {
        std::env::set_var("SEMVAL_TIME_FORMAT", "H:i:s");
        std::env::set_var("SEMVAL_REQUIRE_QUERY", "true");
    }
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings.time_format, "H:i:s");
    assert_eq!(settings.date_format, "Y-m-d");
    assert!(settings.require_query);

    let validator = Validator::new(settings);
    assert!(validator.time("23:45:30"));
    assert!(!validator.time("23:45"));
    assert!(!validator.url("https://example.com/"));
}
