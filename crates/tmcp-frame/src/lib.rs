//! TMCP message model and wire framing.
//!
//! Every message is a list of at most 15 decimal integers rendered as:
//! - a `$` start marker
//! - the comma-separated parameters (the payload)
//! - a `*` marker followed by the CRC-32 of the payload as 8 lowercase hex digits
//! - a CR LF terminator
//!
//! Text for the display modules travels as eight big-endian 16-bit words
//! packed from a fixed 16-byte block (see [`text`]).

pub mod checksum;
pub mod codec;
pub mod command;
pub mod ntype;
pub mod text;

pub use checksum::{checksum, to_hex8, Checksum};
#[cfg(feature = "async")]
pub use codec::TmcpCodec;
pub use codec::{
    encode, encode_bytes, encode_frame, Message, TMCP_CR, TMCP_END, TMCP_LF, TMCP_PARAM_MAX,
    TMCP_SEPARATOR, TMCP_START,
};
pub use command::{
    clear_text, get_channel_state, get_pdu_state, set_channel_state, set_channel_state_str,
    set_pdu_config, show_text, ChannelState, CHANNEL_COUNT,
};
pub use text::{pack_text, pad_and_pack_words, PAD_BYTE, TEXT_BLOCK_SIZE};
