use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::Serialize;
use crate::models::forecast::{forecast_for, Forecast};
use crate::models::loop_packet::DecodedReading;

pub const FRIENDLY_NAME: &str = "Campus Weather";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Attributes {
    pub friendly_name: String,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub wind_speed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_bearing: Option<u16>,
    pub humidity: Option<u8>,
    pub last_update: String,
}

/// State update sent to the publish endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PublishPayload {
    pub state: Option<Forecast>,
    pub attributes: Attributes,
}

impl PublishPayload {
    /// Builds the payload from a decoded reading, scaling pressure to inHg and
    /// temperature to °F and translating the forecast icon
    ///
    /// # Arguments
    ///
    /// * 'reading' - the decoded LOOP packet
    /// * 'now' - time of the reading, published with its offset
    pub fn assemble<Tz: TimeZone>(reading: &DecodedReading, now: DateTime<Tz>) -> PublishPayload
    where
        Tz::Offset: std::fmt::Display,
    {
        PublishPayload {
            state: forecast_for(reading.icon),
            attributes: Attributes {
                friendly_name: FRIENDLY_NAME.to_string(),
                pressure: reading.pressure.map(|p| p as f64 / 1000.0),
                temperature: reading.temperature.map(|t| t as f64 / 10.0),
                wind_speed: reading.wind_speed,
                wind_bearing: reading.wind_bearing,
                humidity: reading.humidity,
                last_update: now.to_rfc3339_opts(SecondsFormat::Secs, false),
            },
        }
    }
}
