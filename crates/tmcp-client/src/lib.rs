//! Persistent, auto-reconnecting TMCP device connections.
//!
//! This is the "just works" layer: build a command with `tmcp-frame`, hand it
//! to a [`PersistentConnection`], and the connection opens, serializes and
//! heals the link as needed.

pub mod config;
pub mod connection;
pub mod device;
pub mod error;

pub use config::{ConnectionConfig, DEFAULT_RESPONSE_BUFFER, DEFAULT_TIMEOUT};
pub use connection::{ConnectionState, PersistentConnection};
pub use device::{OledModule, PduModule};
pub use error::{ClientError, Result};
