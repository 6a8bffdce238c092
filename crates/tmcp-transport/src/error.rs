use std::time::Duration;

/// Errors that can occur in TMCP transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open a stream to the device.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// An I/O error occurred on an open stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An operation did not complete within its configured timeout.
    #[error("{op} timed out after {after:?}")]
    Timeout { op: &'static str, after: Duration },

    /// The peer closed the stream.
    #[error("connection closed by peer")]
    Closed,
}

impl TransportError {
    /// True for timeouts of any operation.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
