use std::sync::atomic::{AtomicU64, Ordering};

use bytes::{Bytes, BytesMut};
use futures_util::SinkExt;
use tmcp_frame::{ntype, Message, TmcpCodec};
use tmcp_transport::{with_timeout, Connector, TcpConnector, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio_util::codec::FramedWrite;
use tracing::{debug, info_span, warn, Instrument, Span};

use crate::config::ConnectionConfig;
use crate::error::{ClientError, Result};

/// Link state of a [`PersistentConnection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// A lazily opened, self-healing stream to one device.
///
/// All operations take the connection's lock, so at most one connect,
/// disconnect or send (including its reconnect-and-retry) runs at a time and
/// frames from concurrent callers reach the wire whole, in lock order.
///
/// A write that fails on the transport closes the stream, reconnects and
/// writes the frame once more. A second failure is returned to the caller.
/// Once a frame is on the wire it is never resent: a failed response read
/// closes the stream and is returned as is.
pub struct PersistentConnection<C: Connector = TcpConnector> {
    connector: C,
    config: ConnectionConfig,
    stream: Mutex<Option<C::Stream>>,
    reconnects: AtomicU64,
    span: Span,
}

impl PersistentConnection<TcpConnector> {
    /// TCP connection to `host:port` with default configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(host, port, ConnectionConfig::default())
    }

    /// TCP connection to `host:port` with explicit configuration.
    pub fn with_config(host: impl Into<String>, port: u16, config: ConnectionConfig) -> Self {
        Self::with_connector(TcpConnector::new(host, port), config)
    }
}

impl<C: Connector> PersistentConnection<C> {
    /// Connection over an arbitrary connector.
    pub fn with_connector(connector: C, config: ConnectionConfig) -> Self {
        let span = info_span!("tmcp_connection", peer = %connector.peer_addr());
        Self {
            connector,
            config,
            stream: Mutex::new(None),
            reconnects: AtomicU64::new(0),
            span,
        }
    }

    /// Log all connection activity inside `span` instead of the default one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn addr(&self) -> String {
        self.connector.peer_addr()
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Number of reconnect-and-retry cycles performed so far.
    pub fn reconnects(&self) -> u64 {
        self.reconnects.load(Ordering::Relaxed)
    }

    /// Current link state. Waits for any in-flight send to finish.
    pub async fn state(&self) -> ConnectionState {
        if self.stream.lock().await.is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Open the stream if it is not open yet.
    ///
    /// Failures are returned as [`ClientError::Connect`] and not retried.
    pub async fn connect(&self) -> Result<()> {
        let mut slot = self.stream.lock().await;
        self.open(&mut slot).instrument(self.span.clone()).await
    }

    /// Shut the stream down if it is open. Never fails.
    pub async fn disconnect(&self) {
        let mut slot = self.stream.lock().await;
        self.close(&mut slot).instrument(self.span.clone()).await;
    }

    /// Send one message, optionally returning the device's reply.
    ///
    /// With `expect_response`, the first read after the write (up to
    /// `response_buffer_size` bytes) is returned uninterpreted. A peer that
    /// closes the stream instead of replying yields an empty reply.
    pub async fn send(&self, message: &Message, expect_response: bool) -> Result<Option<Bytes>> {
        self.send_inner(message, expect_response)
            .instrument(self.span.clone())
            .await
    }

    async fn send_inner(&self, message: &Message, expect_response: bool) -> Result<Option<Bytes>> {
        let mut slot = self.stream.lock().await;
        self.open(&mut slot).await?;

        debug!(
            ntype = ntype::name(message.ntype().unwrap_or_default()),
            frame = %message,
            "sending frame"
        );

        if let Err(first) = self.write_frame(&mut slot, message).await {
            warn!(error = %first, "connection lost, reconnecting");
            self.close(&mut slot).await;
            self.open(&mut slot).await?;
            self.reconnects.fetch_add(1, Ordering::Relaxed);

            if let Err(err) = self.write_frame(&mut slot, message).await {
                self.close(&mut slot).await;
                return Err(ClientError::Transport(err));
            }
        }

        if !expect_response {
            return Ok(None);
        }

        match self.read_reply(&mut slot).await {
            Ok(reply) => {
                if reply.is_empty() {
                    debug!("peer closed the stream without replying");
                    self.close(&mut slot).await;
                }
                Ok(Some(reply))
            }
            Err(err) => {
                warn!(error = %err, "no reply from device, dropping connection");
                self.close(&mut slot).await;
                Err(ClientError::Transport(err))
            }
        }
    }

    async fn open(&self, slot: &mut Option<C::Stream>) -> Result<()> {
        if slot.is_some() {
            return Ok(());
        }

        debug!("connecting");
        let stream = with_timeout(
            "connect",
            self.config.connect_timeout,
            self.connector.connect(),
        )
        .await
        .map_err(ClientError::Connect)?;
        *slot = Some(stream);
        Ok(())
    }

    async fn close(&self, slot: &mut Option<C::Stream>) {
        let Some(mut stream) = slot.take() else {
            return;
        };

        debug!("disconnecting");
        if let Err(err) =
            with_timeout("shutdown", self.config.write_timeout, stream.shutdown()).await
        {
            debug!(error = %err, "shutdown failed, dropping stream");
        }
    }

    async fn write_frame(
        &self,
        slot: &mut Option<C::Stream>,
        message: &Message,
    ) -> std::result::Result<(), TransportError> {
        let Some(stream) = slot.as_mut() else {
            return Err(TransportError::Closed);
        };

        let mut framed = FramedWrite::new(stream, TmcpCodec);
        with_timeout("write", self.config.write_timeout, framed.send(message)).await
    }

    /// One read of at most `response_buffer_size` bytes. Empty on peer EOF.
    async fn read_reply(
        &self,
        slot: &mut Option<C::Stream>,
    ) -> std::result::Result<Bytes, TransportError> {
        let Some(stream) = slot.as_mut() else {
            return Err(TransportError::Closed);
        };

        let mut buf = BytesMut::zeroed(self.config.response_buffer_size.max(1));
        let read = with_timeout("read", self.config.read_timeout, stream.read(&mut buf)).await?;
        buf.truncate(read);
        Ok(buf.freeze())
    }
}

impl<C: Connector> std::fmt::Debug for PersistentConnection<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentConnection")
            .field("peer", &self.connector.peer_addr())
            .field("config", &self.config)
            .field("reconnects", &self.reconnects())
            .finish()
    }
}
