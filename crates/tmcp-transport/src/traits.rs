use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::{Result, TransportError};

/// Opens byte streams to one fixed device endpoint.
///
/// This is the seam between the connection logic and the network: the TCP
/// implementation lives in [`crate::tcp`], tests substitute scripted streams.
pub trait Connector: Send + Sync {
    /// The connected stream type.
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    /// Open a new stream to the endpoint.
    fn connect(&self) -> impl Future<Output = Result<Self::Stream>> + Send;

    /// Endpoint description for logs and errors.
    fn peer_addr(&self) -> String;
}

/// Run `fut`, failing with [`TransportError::Timeout`] once `timeout` elapses.
///
/// `None` waits indefinitely.
pub async fn with_timeout<T, E, F>(op: &'static str, timeout: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<TransportError>,
{
    match timeout {
        Some(after) => match tokio::time::timeout(after, fut).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(TransportError::Timeout { op, after }),
        },
        None => fut.await.map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_timeout_passes_through_result() {
        let value = with_timeout("read", Some(Duration::from_secs(1)), async {
            Ok::<_, std::io::Error>(7)
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn with_timeout_maps_io_errors() {
        let err = with_timeout("write", None, async {
            Err::<(), _>(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        })
        .await
        .unwrap_err();
        match err {
            TransportError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn with_timeout_expires() {
        let err = with_timeout(
            "read",
            Some(Duration::from_millis(10)),
            std::future::pending::<std::io::Result<()>>(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, TransportError::Timeout { op: "read", .. }));
        assert!(err.is_timeout());
    }
}
