//! Async transport for TMCP device links.
//!
//! Provides the [`Connector`] abstraction used by the connection layer and
//! its TCP implementation. This is the lowest layer of tmcp; everything that
//! touches the network goes through it.

pub mod error;
pub mod tcp;
pub mod traits;

pub use error::{Result, TransportError};
pub use tcp::TcpConnector;
pub use traits::{with_timeout, Connector};
