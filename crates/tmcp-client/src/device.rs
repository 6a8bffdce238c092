//! Per-device facades pairing the command builders with a connection.

use bytes::Bytes;
use tmcp_frame::{
    clear_text, get_channel_state, get_pdu_state, set_channel_state, set_pdu_config, show_text,
    ChannelState,
};
use tmcp_transport::{Connector, TcpConnector};
use tracing::{info, warn};

use crate::connection::PersistentConnection;
use crate::error::Result;

/// Try to connect once; on failure log and leave reconnection to the next send.
async fn start_connection<C: Connector>(
    connection: &PersistentConnection<C>,
    device: &str,
) -> bool {
    match connection.connect().await {
        Ok(()) => true,
        Err(err) => {
            warn!(
                device,
                addr = %connection.addr(),
                error = %err,
                "could not connect, will retry on next send"
            );
            false
        }
    }
}

/// An OLED text display module.
#[derive(Debug)]
pub struct OledModule<C: Connector = TcpConnector> {
    connection: PersistentConnection<C>,
}

impl OledModule<TcpConnector> {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_connection(PersistentConnection::new(host, port))
    }
}

impl<C: Connector> OledModule<C> {
    pub fn with_connection(connection: PersistentConnection<C>) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &PersistentConnection<C> {
        &self.connection
    }

    /// Connect eagerly. Returns false when the device was unreachable.
    pub async fn start(&self) -> bool {
        start_connection(&self.connection, "oled").await
    }

    /// Show up to 16 characters of `text`.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        info!(text, "sending text");
        self.connection.send(&show_text(text), false).await?;
        Ok(())
    }

    pub async fn clear_text(&self) -> Result<()> {
        info!("clearing display");
        self.connection.send(&clear_text(), false).await?;
        Ok(())
    }

    pub async fn shutdown(&self) {
        self.connection.disconnect().await;
    }
}

/// A power-distribution module with switchable channels.
#[derive(Debug)]
pub struct PduModule<C: Connector = TcpConnector> {
    connection: PersistentConnection<C>,
}

impl PduModule<TcpConnector> {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_connection(PersistentConnection::new(host, port))
    }
}

impl<C: Connector> PduModule<C> {
    pub fn with_connection(connection: PersistentConnection<C>) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &PersistentConnection<C> {
        &self.connection
    }

    /// Connect eagerly. Returns false when the device was unreachable.
    pub async fn start(&self) -> bool {
        start_connection(&self.connection, "pdu").await
    }

    /// Switch a channel and return the device's raw acknowledgement.
    pub async fn set_channel(&self, channel: i64, state: ChannelState) -> Result<Bytes> {
        info!(channel, %state, "setting channel");
        let reply = self
            .connection
            .send(&set_channel_state(channel, state), true)
            .await?;
        Ok(reply.unwrap_or_default())
    }

    /// Raw state report for the channel named `channel_id`.
    pub async fn get_channel_state(&self, channel_id: &str) -> Result<Bytes> {
        let reply = self
            .connection
            .send(&get_channel_state(channel_id), true)
            .await?;
        Ok(reply.unwrap_or_default())
    }

    /// Raw PDU state report.
    pub async fn get_state(&self) -> Result<Bytes> {
        let reply = self.connection.send(&get_pdu_state(), true).await?;
        Ok(reply.unwrap_or_default())
    }

    pub async fn set_config(&self, args: &str) -> Result<()> {
        info!(args, "setting configuration");
        self.connection.send(&set_pdu_config(args), false).await?;
        Ok(())
    }

    pub async fn shutdown(&self) {
        self.connection.disconnect().await;
    }
}
