use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};
use log::debug;
use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};
use crate::config::StationParameters;
use crate::manager_station::errors::StationError;

/// Byte channel to the station console
pub trait Transport {
    /// Writes all bytes to the console
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StationError>;

    /// Reads into buf until it is full or the timeout has passed, returning the number of
    /// bytes actually received. Running out of time is not an error.
    fn read_exact_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, StationError>;

    /// Drops whatever has arrived but not yet been read
    fn discard_input(&mut self) -> Result<(), StationError>;
}

/// Transport over a serial port, closed when dropped
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Opens the serial port given in the station parameters (8N1)
    ///
    /// # Arguments
    ///
    /// * 'params' - device path, baud rate and read timeout
    pub fn open(params: &StationParameters) -> Result<Self, StationError> {
        let port = serialport::new(&params.device, params.baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .timeout(params.timeout())
            .open()?;

        debug!("opened {} at {} baud", params.device, params.baud_rate);

        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), StationError> {
        self.port.write_all(bytes)?;
        self.port.flush()?;

        Ok(())
    }

    fn read_exact_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, StationError> {
        let deadline = Instant::now() + timeout;
        let mut filled = 0;

        while filled < buf.len() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            self.port.set_timeout(remaining)?;

            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(filled)
    }

    fn discard_input(&mut self) -> Result<(), StationError> {
        self.port.clear(ClearBuffer::Input)?;

        Ok(())
    }
}
