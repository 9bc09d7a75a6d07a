use std::fs;
use std::time::Duration;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StationParameters {
    pub device: String,
    pub baud_rate: u32,
    pub timeout_ms: u64,
    pub wake_attempts: u32,
}

impl Default for StationParameters {
    fn default() -> Self {
        Self {
            device: "/dev/ttyUSB0".to_string(),
            baud_rate: 19200,
            timeout_ms: 1200,
            wake_attempts: 3,
        }
    }
}

impl StationParameters {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PublishParameters {
    pub http_timeout_secs: u64,
    pub token_var: String,
}

impl Default for PublishParameters {
    fn default() -> Self {
        Self {
            http_timeout_secs: 30,
            token_var: "TOKEN".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Warn,
            log_to_stderr: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub station: StationParameters,
    pub publish: PublishParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
/// Items missing in the file keep their default values.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration from a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.station.wake_attempts == 0 {
        return Err(ConfigError::from("station.wake_attempts must be at least 1"))
    }
    if config.station.timeout_ms == 0 {
        return Err(ConfigError::from("station.timeout_ms must be at least 1"))
    }
    if config.station.baud_rate == 0 {
        return Err(ConfigError::from("station.baud_rate must be at least 1"))
    }
    if config.publish.http_timeout_secs == 0 {
        return Err(ConfigError::from("publish.http_timeout_secs must be at least 1"))
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.station.device, "/dev/ttyUSB0");
        assert_eq!(config.station.baud_rate, 19200);
        assert_eq!(config.station.timeout(), Duration::from_millis(1200));
        assert_eq!(config.station.wake_attempts, 3);
        assert_eq!(config.publish.token_var, "TOKEN");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = parse_config(r#"
            [station]
            device = "/dev/ttyS1"

            [general]
            log_level = "debug"
            log_path = "/var/log/vantage-relay.log"
        "#).unwrap();

        assert_eq!(config.station.device, "/dev/ttyS1");
        assert_eq!(config.station.baud_rate, 19200);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.general.log_path.as_deref(), Some("/var/log/vantage-relay.log"));
        assert!(config.general.log_to_stderr);
        assert_eq!(config.publish.http_timeout_secs, 30);
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let result = parse_config("[station]\nwake_attempts = 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = parse_config("[station]\ntimeout_ms = 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_baud_rate_is_rejected() {
        let result = parse_config("[station]\nbaud_rate = 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_http_timeout_is_rejected() {
        let result = parse_config("[publish]\nhttp_timeout_secs = 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_document_is_rejected() {
        let result = parse_config("[station]\nbaud_rate = \"fast\"\n");

        assert!(matches!(result, Err(ConfigError::Document(_))));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = load_config("/nonexistent/vantage-relay.toml");

        assert!(matches!(result, Err(ConfigError::File(_))));
    }
}
