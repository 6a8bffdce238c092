//! Control TMCP display and power-distribution modules over TCP.
//!
//! TMCP is a checksummed, line-oriented text protocol spoken by small
//! peripheral modules (OLED displays, power-distribution units). This crate
//! bundles three layers:
//!
//! # Crate Structure
//!
//! - [`transport`] - TCP transport and the `Connector` seam
//! - [`frame`] - message model, checksum framing, text packing, command builders
//! - [`client`] - persistent, self-healing connections and device facades
//!   (behind the `client` feature, on by default)

/// Re-export transport types.
pub mod transport {
    pub use tmcp_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use tmcp_frame::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use tmcp_client::*;
}
