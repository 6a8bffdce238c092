use tokio::net::TcpStream;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::Connector;

/// TCP transport to a device at a fixed host and port.
///
/// Connecting waits as long as the OS does; callers bound it with
/// [`with_timeout`](crate::with_timeout).
#[derive(Debug, Clone)]
pub struct TcpConnector {
    host: String,
    port: u16,
}

impl TcpConnector {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Connector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(&self) -> Result<TcpStream> {
        let addr = self.peer_addr();
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|source| TransportError::Connect {
                addr: addr.clone(),
                source,
            })?;
        // Small frames, written one at a time.
        stream.set_nodelay(true)?;
        debug!(%addr, "connected to device");
        Ok(stream)
    }

    fn peer_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn connect_and_exchange_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 5];
            socket.read_exact(&mut buf).await.unwrap();
            buf
        });

        let connector = TcpConnector::new("127.0.0.1", port);
        let mut stream = connector.connect().await.unwrap();
        stream.write_all(b"hello").await.unwrap();

        assert_eq!(&server.await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn connect_refused_reports_address() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let connector = TcpConnector::new("127.0.0.1", port);
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, TransportError::Connect { .. }));
        assert!(err.to_string().contains(&format!("127.0.0.1:{port}")));
    }

    #[test]
    fn peer_addr_is_host_and_port() {
        let connector = TcpConnector::new("10.0.0.7", 5000);
        assert_eq!(connector.peer_addr(), "10.0.0.7:5000");
    }
}
