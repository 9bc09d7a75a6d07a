use chrono::{DateTime, Local, TimeZone};
use log::info;
use crate::errors::RunError;
use crate::initialization::Mgr;
use crate::manager_station::serial::Transport;
use crate::manager_station::Station;
use crate::models::loop_packet::decode;
use crate::models::publish_payload::PublishPayload;

/// Polls the station once and publishes the reading
///
/// # Arguments
///
/// * 'mgr' - station and publisher prepared by initialization
pub fn run(mgr: Mgr) -> Result<(), RunError> {
    let payload = collect(mgr.station, Local::now())?;

    mgr.publisher.publish(&payload)?;

    Ok(())
}

/// Wakes the station, fetches and decodes one LOOP packet and assembles the payload.
/// The station is consumed and its transport closed before decoding starts.
///
/// # Arguments
///
/// * 'station' - an idle station session
/// * 'now' - time stamp for the reading
pub fn collect<T: Transport, Tz: TimeZone>(station: Station<T>, now: DateTime<Tz>) -> Result<PublishPayload, RunError>
where
    Tz::Offset: std::fmt::Display,
{
    let packet = station.poll()?;
    let reading = decode(&packet)?;

    info!("decoded reading: {:?}", reading);

    Ok(PublishPayload::assemble(&reading, now))
}
