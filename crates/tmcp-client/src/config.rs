use std::time::Duration;

/// Default response buffer size for `send(.., expect_response = true)`.
pub const DEFAULT_RESPONSE_BUFFER: usize = 1024;

/// Default timeout applied to connect, write and read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a persistent device connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Time allowed to open the stream. `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// Time allowed to write and flush one frame.
    pub write_timeout: Option<Duration>,
    /// Time allowed for the response read.
    pub read_timeout: Option<Duration>,
    /// Maximum number of response bytes returned by one send.
    pub response_buffer_size: usize,
}

impl ConnectionConfig {
    /// Apply one timeout to connect, write and read.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self.write_timeout = timeout;
        self.read_timeout = timeout;
        self
    }

    pub fn with_response_buffer_size(mut self, size: usize) -> Self {
        self.response_buffer_size = size;
        self
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(DEFAULT_TIMEOUT),
            write_timeout: Some(DEFAULT_TIMEOUT),
            read_timeout: Some(DEFAULT_TIMEOUT),
            response_buffer_size: DEFAULT_RESPONSE_BUFFER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.read_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.response_buffer_size, 1024);
    }

    #[test]
    fn with_timeout_sets_all() {
        let config = ConnectionConfig::default()
            .with_timeout(None)
            .with_response_buffer_size(64);
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.write_timeout, None);
        assert_eq!(config.read_timeout, None);
        assert_eq!(config.response_buffer_size, 64);
    }
}
