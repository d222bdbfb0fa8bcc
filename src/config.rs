//! Runtime settings read from the environment (and `.env`, via dotenv)

use chrono::NaiveDateTime;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::ConfigError;

const SUBMIT_DELAY_MS: u64 = 2000;
const LOAD_DELAY_MS: u64 = 1000;
const SUBMIT_FAILURE_RATE: f64 = 0.2;
const LOAD_FAILURE_RATE: f64 = 0.1;
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Simulated latency of a transfer submission
    pub submit_delay: Duration,
    /// Simulated latency of the history fetch
    pub load_delay: Duration,
    pub submit_failure_rate: f64,
    pub load_failure_rate: f64,
    /// History rows per page
    pub page_size: usize,
    /// Pinned "now" for date-range filters; the local clock when unset
    pub now: Option<NaiveDateTime>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
            load_delay: Duration::from_millis(LOAD_DELAY_MS),
            submit_failure_rate: SUBMIT_FAILURE_RATE,
            load_failure_rate: LOAD_FAILURE_RATE,
            page_size: PAGE_SIZE,
            now: None,
        }
    }
}

impl Config {
    /// Load settings from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(ms) = parse_var::<u64, _>(&lookup, "PAYWISE_SUBMIT_DELAY_MS")? {
            config.submit_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "PAYWISE_LOAD_DELAY_MS")? {
            config.load_delay = Duration::from_millis(ms);
        }
        if let Some(rate) = parse_rate(&lookup, "PAYWISE_SUBMIT_FAILURE_RATE")? {
            config.submit_failure_rate = rate;
        }
        if let Some(rate) = parse_rate(&lookup, "PAYWISE_LOAD_FAILURE_RATE")? {
            config.load_failure_rate = rate;
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, "PAYWISE_PAGE_SIZE")? {
            if size == 0 {
                return Err(invalid("PAYWISE_PAGE_SIZE", "0", "must be at least 1"));
            }
            config.page_size = size;
        }
        if let Some(raw) = lookup("PAYWISE_NOW") {
            let now = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S")
                .map_err(|e| invalid("PAYWISE_NOW", &raw, &e.to_string()))?;
            config.now = Some(now);
        }

        Ok(config)
    }

    /// Current time as seen by the date filters
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(key, &raw, &e.to_string())),
    }
}

fn parse_rate<F>(lookup: &F, key: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rate = parse_var::<f64, _>(lookup, key)?;
    match rate {
        Some(r) if !(0.0..=1.0).contains(&r) => {
            Err(invalid(key, &r.to_string(), "must be between 0 and 1"))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.submit_delay, Duration::from_secs(2));
        assert_eq!(config.submit_failure_rate, 0.2);
        assert_eq!(config.load_failure_rate, 0.1);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PAYWISE_SUBMIT_DELAY_MS", "0"),
            ("PAYWISE_LOAD_FAILURE_RATE", "1"),
            ("PAYWISE_PAGE_SIZE", "3"),
            ("PAYWISE_NOW", "2025-06-19T17:00:00"),
        ]))
        .unwrap();
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.load_failure_rate, 1.0);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.now().to_string(), "2025-06-19 17:00:00");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup_from(&[("PAYWISE_SUBMIT_FAILURE_RATE", "1.5")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PAYWISE_LOAD_DELAY_MS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PAYWISE_PAGE_SIZE", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PAYWISE_NOW", "yesterday")])).is_err());
    }
}
