use contextify::presentation::Environment;

#[test]
fn given_local_string_when_parsing_then_returns_local() {
    let result: Result<Environment, _> = "local".to_string().try_into();
    assert_eq!(result.unwrap(), Environment::Local);
}

#[test]
fn given_mixed_case_string_when_parsing_then_is_case_insensitive() {
    let result: Result<Environment, _> = "TEST".to_string().try_into();
    assert_eq!(result.unwrap(), Environment::Test);
}

#[test]
fn given_production_alias_when_parsing_then_returns_prod() {
    let result: Result<Environment, _> = "production".to_string().try_into();
    assert_eq!(result.unwrap(), Environment::Prod);
}

#[test]
fn given_unknown_string_when_parsing_then_returns_error() {
    let result: Result<Environment, _> = "staging".to_string().try_into();
    assert!(result.is_err());
}

#[test]
fn given_environment_when_displayed_then_matches_config_file_suffix() {
    assert_eq!(Environment::Local.to_string(), "local");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Prod.to_string(), "prod");
}
