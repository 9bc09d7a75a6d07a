pub mod errors;
pub mod serial;

use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;
use log::{debug, info, warn};
use crate::config::StationParameters;
use crate::manager_station::errors::StationError;
use crate::manager_station::serial::Transport;
use crate::models::loop_packet::{RawPacket, PACKET_SIZE};

const WAKE_REQUEST: &[u8] = b"\n";
const WAKE_ACK: [u8; 2] = *b"\n\r";
const LOOP_REQUEST: &[u8] = b"LOOP 1\n";

/// Wake handshake states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeState {
    Idle,
    Waking,
    Awake,
    Failed,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for WakeState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WakeState::Idle   => write!(f, "Idle"),
            WakeState::Waking => write!(f, "Waking"),
            WakeState::Awake  => write!(f, "Awake"),
            WakeState::Failed => write!(f, "Failed"),
        }
    }
}

/// Struct for one polling session against the station console.
/// The session owns the transport, so the port closes when the session is dropped.
pub struct Station<T: Transport> {
    transport: T,
    timeout: Duration,
    max_attempts: u32,
    attempts: u32,
    state: WakeState,
}

impl<T: Transport> Station<T> {
    /// Returns a new Station in the Idle state
    ///
    /// # Arguments
    ///
    /// * 'transport' - an open transport to the console
    /// * 'params' - read timeout and number of wake attempts
    pub fn new(transport: T, params: &StationParameters) -> Self {
        Self {
            transport,
            timeout: params.timeout(),
            max_attempts: params.wake_attempts,
            attempts: 0,
            state: WakeState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> WakeState {
        self.state
    }

    /// Number of wake probes sent so far
    #[cfg(test)]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wakes the console from its sleep mode.
    ///
    /// Sends a newline and waits for `\n\r`, one probe at a time, until acknowledged or
    /// the attempt budget is spent. Each probe gets its own deadline.
    pub fn wake(&mut self) -> Result<(), StationError> {
        self.state = WakeState::Waking;

        match self.probe_until_awake() {
            Ok(true) => {
                info!("station awake after {} attempt(s)", self.attempts);
                self.state = WakeState::Awake;
                Ok(())
            },
            Ok(false) => {
                self.state = WakeState::Failed;
                warn!("station {} after {} attempt(s)", self.state, self.attempts);
                Err(StationError::StationNotReady)
            },
            Err(e) => {
                self.state = WakeState::Failed;
                Err(e)
            },
        }
    }

    fn probe_until_awake(&mut self) -> Result<bool, StationError> {
        while self.attempts < self.max_attempts {
            self.attempts += 1;
            debug!("wake attempt {} of {}", self.attempts, self.max_attempts);

            self.transport.write_all(WAKE_REQUEST)?;

            let mut ack = [0u8; 2];
            let received = self.transport.read_exact_timeout(&mut ack, self.timeout)?;
            if received == ack.len() && ack == WAKE_ACK {
                return Ok(true);
            }

            if received > 0 {
                warn!("unexpected wake response {:?}", &ack[..received]);
            }
        }

        Ok(false)
    }

    /// Requests one LOOP packet from an awake console and waits for all of it.
    /// Late wake acknowledgements still in the input buffer are dropped first.
    pub fn request_packet(&mut self) -> Result<RawPacket, StationError> {
        if self.state != WakeState::Awake {
            return Err(StationError::StationNotReady);
        }

        self.transport.discard_input()?;
        self.transport.write_all(LOOP_REQUEST)?;

        let mut packet = vec![0u8; PACKET_SIZE];
        let received = self.transport.read_exact_timeout(&mut packet, self.timeout)?;
        if received < PACKET_SIZE {
            debug!("received {} of {} packet bytes", received, PACKET_SIZE);
            return Err(StationError::PacketTimeout);
        }

        info!("received LOOP packet");

        Ok(RawPacket::from(packet))
    }

    /// Runs the whole session, wake handshake followed by the packet exchange.
    /// Consumes the station so that the transport is closed on every outcome.
    pub fn poll(mut self) -> Result<RawPacket, StationError> {
        self.wake()?;
        self.request_packet()
    }
}
