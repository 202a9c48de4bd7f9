use sustainvec_cli::{require_env, ConfigError};

#[test]
fn missing_variable_is_a_config_error() {
    let err = require_env("SUSTAINVEC_TEST_NEVER_SET").unwrap_err();
    assert_eq!(err, ConfigError::MissingEnv("SUSTAINVEC_TEST_NEVER_SET"));
    assert!(err.to_string().contains("SUSTAINVEC_TEST_NEVER_SET is not set"));
}

#[test]
fn blank_variable_counts_as_missing() {
    std::env::set_var("SUSTAINVEC_TEST_BLANK", "   ");
    assert!(require_env("SUSTAINVEC_TEST_BLANK").is_err());
}

#[test]
fn present_variable_is_returned() {
    std::env::set_var("SUSTAINVEC_TEST_PRESENT", "sk-test");
    assert_eq!(require_env("SUSTAINVEC_TEST_PRESENT").unwrap(), "sk-test");
}
