use crate::crc;
use crate::errors::DecodeError;

/// Size of a LOOP response including the leading acknowledgement byte
pub const PACKET_SIZE: usize = 100;

const ACK: u8 = 0x06;
const TAG: &[u8; 3] = b"LOO";
const TERMINATOR: &[u8; 2] = b"\n\r";

const PRESSURE: usize = 8;
const TEMPERATURE: usize = 13;
const WIND_SPEED: usize = 15;
const WIND_BEARING: usize = 17;
const HUMIDITY: usize = 34;
const ICON: usize = 90;

/// Bytes as received from the console in response to a LOOP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPacket(Vec<u8>);

impl RawPacket {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawPacket {
    fn from(bytes: Vec<u8>) -> Self {
        RawPacket(bytes)
    }
}

/// Measurements extracted from a LOOP packet, None where the console reported no data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedReading {
    /// Barometer in thousandths of inHg
    pub pressure: Option<u16>,
    /// Outside temperature in tenths of °F
    pub temperature: Option<u16>,
    /// Wind speed in mph
    pub wind_speed: Option<u8>,
    /// Wind direction in degrees, 0 means north
    pub wind_bearing: Option<u16>,
    /// Outside humidity in percent
    pub humidity: Option<u8>,
    pub icon: u8,
}

/// Validates a LOOP packet and extracts its measurements.
///
/// The packet must be exactly 100 bytes shaped as `0x06 "LOO" <payload> "\n\r" <crc>`, and the CRC
/// over everything after the acknowledgement byte, trailing CRC included, must be zero.
/// Sentinel values reported by the console for missing sensors are mapped to None.
///
/// # Arguments
///
/// * 'packet' - the raw packet as received
pub fn decode(packet: &RawPacket) -> Result<DecodedReading, DecodeError> {
    let bytes = packet.as_bytes();

    if bytes.len() != PACKET_SIZE {
        return Err(DecodeError::Malformed(format!("expected {} bytes, got {}", PACKET_SIZE, bytes.len())));
    }
    if bytes[0] != ACK {
        return Err(DecodeError::Malformed(format!("expected ACK, got 0x{:02x}", bytes[0])));
    }
    if bytes[1..4] != TAG[..] {
        return Err(DecodeError::Malformed("missing LOO tag".to_string()));
    }
    if bytes[PACKET_SIZE - 4..PACKET_SIZE - 2] != TERMINATOR[..] {
        return Err(DecodeError::Malformed("missing line terminator".to_string()));
    }
    if !crc::is_valid(&bytes[1..]) {
        return Err(DecodeError::Malformed("checksum mismatch".to_string()));
    }

    let pressure = read_u16(bytes, PRESSURE);
    let temperature = read_u16(bytes, TEMPERATURE);
    let wind_speed = bytes[WIND_SPEED];
    let wind_bearing = read_u16(bytes, WIND_BEARING);
    let humidity = bytes[HUMIDITY];

    Ok(DecodedReading {
        pressure: (pressure != 0).then_some(pressure),
        temperature: (temperature != 32767).then_some(temperature),
        wind_speed: (wind_speed != 255).then_some(wind_speed),
        // 0 is no data, so north is sent as 360
        wind_bearing: match wind_bearing {
            0 => None,
            360 => Some(0),
            b => Some(b),
        },
        humidity: (humidity != 255).then_some(humidity),
        icon: bytes[ICON],
    })
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}
