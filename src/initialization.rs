use std::env;
use std::time::Duration;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::InitError;
use crate::logging::setup_logger;
use crate::manager_publish::Publisher;
use crate::manager_station::serial::SerialTransport;
use crate::manager_station::Station;

/// Environment variable pointing out an optional configuration file
pub const CONFIG_VAR: &str = "WEATHER_CONFIG";

/// Everything needed for one run
pub struct Mgr {
    pub station: Station<SerialTransport>,
    pub publisher: Publisher,
}

/// Reads arguments, environment and configuration, starts logging, opens the station
/// and prepares the publisher
///
pub fn init() -> Result<Mgr, InitError> {
    let url = endpoint_url(env::args().skip(1))?;

    let config = match env::var(CONFIG_VAR) {
        Ok(path) => load_config(&path)?,
        Err(_) => Config::default(),
    };

    setup_logger(&config.general)?;

    info!("vantage-relay version: {}", env!("CARGO_PKG_VERSION"));

    let token = env::var(&config.publish.token_var)
        .map_err(|_| InitError::Token(config.publish.token_var.clone()))?;

    let transport = SerialTransport::open(&config.station)?;
    let station = Station::new(transport, &config.station);
    let publisher = Publisher::new(url, token, Duration::from_secs(config.publish.http_timeout_secs));

    Ok(Mgr { station, publisher })
}

/// Returns the sole positional argument
///
/// # Arguments
///
/// * 'args' - program arguments without the program name
fn endpoint_url(mut args: impl Iterator<Item = String>) -> Result<String, InitError> {
    match (args.next(), args.next()) {
        (Some(url), None) => Ok(url),
        _ => Err(InitError::Usage),
    }
}
