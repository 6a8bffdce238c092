use tmcp_transport::TransportError;

/// Errors that can occur on a device connection.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The stream could not be opened; nothing was sent.
    #[error("connect failed: {0}")]
    Connect(#[source] TransportError),

    /// Writing or reading failed, including after the reconnect-and-retry.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// The underlying transport error.
    pub fn transport(&self) -> &TransportError {
        match self {
            ClientError::Connect(err) | ClientError::Transport(err) => err,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.transport().is_timeout()
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
