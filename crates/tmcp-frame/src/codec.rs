use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::checksum::Checksum;

/// Frame start marker.
pub const TMCP_START: char = '$';
/// End-of-payload marker; the checksum follows it.
pub const TMCP_END: char = '*';
/// Parameter separator.
pub const TMCP_SEPARATOR: char = ',';
pub const TMCP_CR: char = '\r';
pub const TMCP_LF: char = '\n';

/// Maximum number of parameters carried by one frame.
pub const TMCP_PARAM_MAX: usize = 15;

/// A TMCP message: an ordered list of at most [`TMCP_PARAM_MAX`] integers.
///
/// The cap is applied on construction and the parameter list is never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message {
    params: Vec<i64>,
}

impl Message {
    /// Build a message, keeping only the first [`TMCP_PARAM_MAX`] parameters.
    pub fn new(params: impl IntoIterator<Item = i64>) -> Self {
        let mut iter = params.into_iter();
        let params: Vec<i64> = iter.by_ref().take(TMCP_PARAM_MAX).collect();
        if iter.next().is_some() {
            debug!(kept = TMCP_PARAM_MAX, "dropping excess message parameters");
        }
        Self { params }
    }

    pub fn params(&self) -> &[i64] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Command tag (second parameter) when present.
    pub fn ntype(&self) -> Option<i64> {
        self.params.get(1).copied()
    }

    /// The checksummed payload: decimal parameters joined by `,`.
    pub fn payload(&self) -> String {
        payload(&self.params)
    }

    /// The complete wire frame, terminator included.
    pub fn to_frame_string(&self) -> String {
        encode(&self.params)
    }

    /// The complete wire frame as bytes.
    pub fn to_bytes(&self) -> Bytes {
        encode_bytes(&self.params)
    }

    /// Wire size of the encoded frame in bytes.
    pub fn wire_size(&self) -> usize {
        self.to_frame_string().len()
    }
}

impl From<Vec<i64>> for Message {
    fn from(params: Vec<i64>) -> Self {
        Self::new(params)
    }
}

impl From<&[i64]> for Message {
    fn from(params: &[i64]) -> Self {
        Self::new(params.iter().copied())
    }
}

/// Renders the frame without its CR LF terminator, for logs.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = self.payload();
        let checksum = Checksum::of(payload.as_bytes());
        write!(f, "{TMCP_START}{payload}{TMCP_END}{checksum}")
    }
}

fn payload(params: &[i64]) -> String {
    let params = &params[..params.len().min(TMCP_PARAM_MAX)];
    let mut out = String::with_capacity(params.len() * 6);
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push(TMCP_SEPARATOR);
        }
        out.push_str(&param.to_string());
    }
    out
}

/// Encode parameters into a wire frame.
///
/// Wire format:
/// ```text
/// $<p0>,<p1>,...,<pN>*<crc32 as 8 lowercase hex>\r\n
/// ```
///
/// Parameters past [`TMCP_PARAM_MAX`] are ignored. The checksum covers the
/// bytes strictly between `$` and `*`. Values are not range checked.
pub fn encode(params: &[i64]) -> String {
    let payload = payload(params);
    let checksum = Checksum::of(payload.as_bytes());
    format!("{TMCP_START}{payload}{TMCP_END}{checksum}{TMCP_CR}{TMCP_LF}")
}

/// UTF-8 bytes of [`encode`].
pub fn encode_bytes(params: &[i64]) -> Bytes {
    Bytes::from(encode(params))
}

/// Append the wire frame for `params` to `dst`.
pub fn encode_frame(params: &[i64], dst: &mut BytesMut) {
    let frame = encode(params);
    dst.reserve(frame.len());
    dst.put_slice(frame.as_bytes());
}

/// `tokio_util` encoder producing TMCP frames from messages.
#[cfg(feature = "async")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TmcpCodec;

#[cfg(feature = "async")]
impl<'a> tokio_util::codec::Encoder<&'a Message> for TmcpCodec {
    type Error = std::io::Error;

    fn encode(&mut self, item: &'a Message, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_frame(item.params(), dst);
        Ok(())
    }
}

#[cfg(feature = "async")]
impl tokio_util::codec::Encoder<Message> for TmcpCodec {
    type Error = std::io::Error;

    fn encode(&mut self, item: Message, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_frame(item.params(), dst);
        Ok(())
    }
}
