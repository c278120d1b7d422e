use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeersError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unable to find encoding length, peer list is missing")]
    MissingPeerList,

    #[error("Invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Invalid port in record at offset {offset}: port should be > 0 and < 65536")]
    InvalidPort { offset: usize },

    #[error("Invalid peer id: expected {expected} bytes, got {actual}")]
    InvalidIdentifier { expected: usize, actual: usize },

    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Length overflow: {0}")]
    LengthOverflow(String),

    #[error("Invalid range: offset {offset}, end {end}, buffer length {len}")]
    InvalidRange { offset: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PeersError>;
