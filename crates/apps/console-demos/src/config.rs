use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Delays and odds used by the demonstrations
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Delay of the single and generic fetches
    pub fetch_delay: Duration,
    /// Delay of the first fetch in the concurrent pair
    pub first_delay: Duration,
    /// Delay of the second fetch in the concurrent pair
    pub second_delay: Duration,
    /// Chance of an injected connection failure in the intermittent lookup
    pub failure_probability: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(3000),
            first_delay: Duration::from_millis(2000),
            second_delay: Duration::from_millis(4000),
            failure_probability: 0.5,
        }
    }
}

impl DemoConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let millis = |key: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            Ok(parse(&lookup, key, "a whole number of milliseconds", |_: &u64| true)?
                .map(Duration::from_millis)
                .unwrap_or(default))
        };

        let failure_probability = parse(
            &lookup,
            "FAILURE_PROBABILITY",
            "a number between 0 and 1",
            |p: &f64| (0.0..=1.0).contains(p),
        )?
        .unwrap_or(defaults.failure_probability);

        Ok(Self {
            fetch_delay: millis("FETCH_DELAY_MS", defaults.fetch_delay)?,
            first_delay: millis("FIRST_DELAY_MS", defaults.first_delay)?,
            second_delay: millis("SECOND_DELAY_MS", defaults.second_delay)?,
            failure_probability,
        })
    }
}

/// Parse `key` when present, rejecting values `accept` refuses
///
/// Errors carry the raw text as the user wrote it.
fn parse<T, F>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
    accept: impl Fn(&T) -> bool,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => Ok(Some(value)),
        _ => Err(ConfigError::Invalid {
            key,
            expected,
            value: raw,
        }),
    }
}
