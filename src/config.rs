use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MOCK_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Live,
    Demo,
    Premium,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Live => "live",
            Variant::Demo => "demo",
            Variant::Premium => "premium",
        }
    }

    pub fn is_simulated(self) -> bool {
        matches!(self, Variant::Demo)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Variant::Live),
            "demo" | "mock" => Ok(Variant::Demo),
            "premium" => Ok(Variant::Premium),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown variant '{0}', expected live, demo or premium")]
    UnknownVariant(String),
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub variant: Variant,
    pub api_url: String,
    pub timeout: Duration,
    pub mock_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            variant: Variant::default(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mock_delay: Duration::from_millis(DEFAULT_MOCK_DELAY_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let variant = match lookup("MOODIFY_VARIANT") {
            Some(value) => value.parse()?,
            None => defaults.variant,
        };

        let api_url = lookup("MOODIFY_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let port = parse_number(&lookup, "PORT")?.unwrap_or(defaults.port);
        let timeout = parse_number(&lookup, "MOODIFY_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let mock_delay = parse_number(&lookup, "MOODIFY_MOCK_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.mock_delay);

        Ok(Self {
            port,
            variant,
            api_url,
            timeout,
            mock_delay,
        })
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_url)
    }
}

fn parse_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.variant, Variant::Live);
        assert_eq!(config.predict_url(), "http://localhost:8000/predict");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("MOODIFY_VARIANT", "Premium"),
            ("MOODIFY_API_URL", "https://mood.example.com/"),
            ("MOODIFY_MOCK_DELAY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.variant, Variant::Premium);
        assert_eq!(config.predict_url(), "https://mood.example.com/predict");
        assert_eq!(config.mock_delay, Duration::ZERO);
    }

    #[test]
    fn bad_values_fail() {
        assert_eq!(
            Config::from_lookup(lookup(&[("MOODIFY_VARIANT", "gold")])).unwrap_err(),
            ConfigError::UnknownVariant("gold".into())
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err(),
            ConfigError::InvalidNumber { name: "PORT", value: "eighty".into() }
        );
    }

    #[test]
    fn mock_is_an_alias_for_demo() {
        assert_eq!("mock".parse::<Variant>().unwrap(), Variant::Demo);
        assert!(Variant::Demo.is_simulated());
        assert!(!Variant::Premium.is_simulated());
    }
}
