use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("Station not ready")]
    StationNotReady,
    #[error("Timed out before receiving packet")]
    PacketTimeout,
    #[error("serial transport error: {0}")]
    Transport(String),
}
impl From<std::io::Error> for StationError {
    fn from(e: std::io::Error) -> StationError {
        StationError::Transport(e.to_string())
    }
}
impl From<serialport::Error> for StationError {
    fn from(e: serialport::Error) -> StationError {
        StationError::Transport(e.to_string())
    }
}
