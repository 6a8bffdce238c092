use std::fmt;

/// Width of the rendered checksum in hex digits.
pub const CHECKSUM_HEX_LEN: usize = 8;

/// CRC-32 (IEEE, zlib-compatible) over `payload`.
pub fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

/// Render a checksum as exactly eight lowercase, zero-padded hex digits.
pub fn to_hex8(value: u32) -> String {
    Checksum(value).to_string()
}

/// A computed frame checksum.
///
/// `Display` renders the wire form, so it can be written straight into a
/// frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum(pub u32);

impl Checksum {
    /// Compute the checksum of a payload.
    pub fn of(payload: &[u8]) -> Self {
        Self(checksum(payload))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
