//! Behavior tests for reading demo configuration

use std::collections::HashMap;
use std::time::Duration;

use console_demos::{ConfigError, DemoConfig};
use rstest::rstest;

fn config_from(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DemoConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_uses_the_documented_defaults() -> Result<(), ConfigError> {
    let config = config_from(&[])?;

    assert_eq!(config.fetch_delay, Duration::from_millis(3000));
    assert_eq!(config.first_delay, Duration::from_millis(2000));
    assert_eq!(config.second_delay, Duration::from_millis(4000));
    assert_eq!(config.failure_probability, 0.5);
    assert_eq!(config, DemoConfig::default());
    Ok(())
}

#[test]
fn every_value_can_be_overridden() -> Result<(), ConfigError> {
    let config = config_from(&[
        ("FETCH_DELAY_MS", "100"),
        ("FIRST_DELAY_MS", " 200 "),
        ("SECOND_DELAY_MS", "300"),
        ("FAILURE_PROBABILITY", "1"),
    ])?;

    assert_eq!(config.fetch_delay, Duration::from_millis(100));
    assert_eq!(config.first_delay, Duration::from_millis(200));
    assert_eq!(config.second_delay, Duration::from_millis(300));
    assert_eq!(config.failure_probability, 1.0);
    Ok(())
}

#[rstest]
#[case("FETCH_DELAY_MS", "soon")]
#[case("FIRST_DELAY_MS", "-5")]
#[case("SECOND_DELAY_MS", "1.5")]
#[case("FAILURE_PROBABILITY", "often")]
#[case("FAILURE_PROBABILITY", "1.5")]
#[case("FAILURE_PROBABILITY", "-0.1")]
fn invalid_values_name_the_offending_variable(#[case] key: &str, #[case] value: &str) {
    let err = config_from(&[(key, value)]).unwrap_err();

    let ConfigError::Invalid { key: reported, .. } = &err;
    assert_eq!(*reported, key);
    assert!(err.to_string().starts_with(key));
}

#[test]
fn out_of_range_probability_reports_the_value_as_written() {
    let err = config_from(&[("FAILURE_PROBABILITY", "1.50")]).unwrap_err();

    assert_eq!(
        err,
        ConfigError::Invalid {
            key: "FAILURE_PROBABILITY",
            expected: "a number between 0 and 1",
            value: "1.50".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "FAILURE_PROBABILITY must be a number between 0 and 1, got '1.50'"
    );
}
