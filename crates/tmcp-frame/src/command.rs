//! Builders for the device commands.
//!
//! Every command starts with a `0` address parameter followed by its tag;
//! text-carrying commands append the eight words of [`pack_text`].

use std::fmt;
use std::str::FromStr;

use crate::codec::Message;
use crate::ntype;
use crate::text::pack_text;

/// Number of switchable channels on a power-distribution module (0–15).
pub const CHANNEL_COUNT: i64 = 16;

/// Output state of a power-distribution channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChannelState {
    #[default]
    Off,
    /// Permanent supply (terminal 30).
    Kl30,
    /// Switched supply (terminal 15).
    Kl15,
}

impl ChannelState {
    /// Wire code. `2` is reserved by the firmware and never produced.
    pub fn code(self) -> i64 {
        match self {
            ChannelState::Off => 0,
            ChannelState::Kl30 => 1,
            ChannelState::Kl15 => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelState::Off => "off",
            ChannelState::Kl30 => "KL30",
            ChannelState::Kl15 => "KL15",
        }
    }

    /// Lenient parse: anything other than `"KL30"` or `"KL15"` is `Off`.
    pub fn parse(value: &str) -> Self {
        match value {
            "KL30" => ChannelState::Kl30,
            "KL15" => ChannelState::Kl15,
            _ => ChannelState::Off,
        }
    }
}

impl FromStr for ChannelState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn with_text(tag: i64, text: &str) -> Message {
    Message::new(
        [0, tag]
            .into_iter()
            .chain(pack_text(text).into_iter().map(i64::from)),
    )
}

/// Show `text` (first 16 characters) on an OLED module.
pub fn show_text(text: &str) -> Message {
    with_text(ntype::OLED_SHOW_TEXT, text)
}

/// Clear the OLED display.
pub fn clear_text() -> Message {
    Message::new([0, ntype::OLED_CLEAR_TEXT])
}

/// Switch a PDU channel.
pub fn set_channel_state(channel: i64, state: ChannelState) -> Message {
    Message::new([0, ntype::CON_STATE_SET, channel, state.code()])
}

/// Switch a PDU channel using the textual state names; unknown names mean off.
pub fn set_channel_state_str(channel: i64, state: &str) -> Message {
    set_channel_state(channel, ChannelState::parse(state))
}

/// Ask for the state of the channel identified by `channel_id`.
pub fn get_channel_state(channel_id: &str) -> Message {
    with_text(ntype::CON_STATE_GET, channel_id)
}

/// Ask for the overall PDU state.
pub fn get_pdu_state() -> Message {
    Message::new([0, ntype::PDU_STATE_GET])
}

/// Send a PDU configuration string.
pub fn set_pdu_config(args: &str) -> Message {
    with_text(ntype::PDU_CONFIG_SET, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_text_blank_known_vector() {
        let message = show_text("");
        assert_eq!(
            message.params(),
            &[0, 12, 8481, 8481, 8481, 8481, 8481, 8481, 8481, 8481]
        );
        assert_eq!(
            message.to_frame_string(),
            "$0,12,8481,8481,8481,8481,8481,8481,8481,8481*ab6f556c\r\n"
        );
    }

    #[test]
    fn show_text_hello() {
        assert_eq!(
            show_text("Hello!").to_frame_string(),
            "$0,12,18533,27756,28449,8481,8481,8481,8481,8481*3c1f6446\r\n"
        );
    }

    #[test]
    fn show_text_long_input_still_ten_params() {
        let message = show_text("this line is far too long for the display");
        assert_eq!(message.len(), 10);
    }

    #[test]
    fn clear_text_params() {
        assert_eq!(clear_text().params(), &[0, 11]);
    }

    #[test]
    fn set_channel_state_mapping() {
        assert_eq!(set_channel_state_str(5, "KL30").params(), &[0, 1, 5, 1]);
        assert_eq!(set_channel_state_str(5, "KL15").params(), &[0, 1, 5, 3]);
        assert_eq!(set_channel_state_str(5, "off").params(), &[0, 1, 5, 0]);
        assert_eq!(set_channel_state_str(5, "bogus").params(), &[0, 1, 5, 0]);
        assert_eq!(
            set_channel_state(5, ChannelState::Kl30).to_frame_string(),
            "$0,1,5,1*798b723e\r\n"
        );
    }

    #[test]
    fn channel_state_codes_skip_two() {
        let codes: Vec<i64> = [ChannelState::Off, ChannelState::Kl30, ChannelState::Kl15]
            .iter()
            .map(|s| s.code())
            .collect();
        assert_eq!(codes, vec![0, 1, 3]);
    }

    #[test]
    fn channel_state_parse_is_case_sensitive() {
        assert_eq!(ChannelState::parse("kl30"), ChannelState::Off);
        assert_eq!("KL15".parse::<ChannelState>().unwrap(), ChannelState::Kl15);
        assert_eq!(ChannelState::Kl30.to_string(), "KL30");
    }

    #[test]
    fn get_channel_state_packs_identifier() {
        assert_eq!(
            get_channel_state("ch01").params(),
            &[0, 3, 25448, 12337, 8481, 8481, 8481, 8481, 8481, 8481]
        );
    }

    #[test]
    fn pdu_commands() {
        assert_eq!(get_pdu_state().params(), &[0, 4]);
        let config = set_pdu_config("");
        assert_eq!(config.ntype(), Some(ntype::PDU_CONFIG_SET));
        assert_eq!(config.len(), 10);
    }
}
