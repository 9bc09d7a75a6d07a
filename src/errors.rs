use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use thiserror::Error;
use crate::manager_publish::errors::PublishError;
use crate::manager_station::errors::StationError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::Invalid: {0}")]
    Invalid(String),
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Invalid(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(#[from] ConfigErrors),
    #[error("LoggingError::Init: {0}")]
    Init(#[from] SetLoggerError),
}

/// Raised when a received packet fails its shape or checksum validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Received malformed packet: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Usage: TOKEN=<token> vantage-relay <url>")]
    Usage,
    #[error("Error getting {0} from environment")]
    Token(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Station(#[from] StationError),
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Station(#[from] StationError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
