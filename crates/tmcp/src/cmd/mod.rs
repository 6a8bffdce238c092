use clap::{Args, Subcommand};
use tmcp_frame::{
    clear_text, get_channel_state, get_pdu_state, set_channel_state, set_pdu_config, show_text,
    ChannelState, Message, CHANNEL_COUNT,
};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod encode;
pub mod probe;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one command to a device.
    Send(SendArgs),
    /// Print the frame of a command without sending it.
    Encode(EncodeArgs),
    /// Check that a device accepts connections.
    Probe(ProbeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Probe(args) => probe::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// The device commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MessageCommand {
    /// Show text on an OLED module (first 16 characters).
    Show { text: String },
    /// Clear an OLED module.
    Clear,
    /// Switch a PDU channel: off, KL30 or KL15 (anything else means off).
    ChannelSet { channel: i64, state: String },
    /// Query a PDU channel by identifier.
    ChannelGet { id: String },
    /// Query the PDU state.
    PduState,
    /// Send a PDU configuration string.
    PduConfig { args: String },
    /// Arbitrary parameters (at most 15 are sent).
    Raw {
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<i64>,
    },
}

impl MessageCommand {
    pub fn to_message(&self) -> CliResult<Message> {
        let message = match self {
            MessageCommand::Show { text } => show_text(text),
            MessageCommand::Clear => clear_text(),
            MessageCommand::ChannelSet { channel, state } => {
                if !(0..CHANNEL_COUNT).contains(channel) {
                    return Err(CliError::new(
                        USAGE,
                        format!("channel must be between 0 and {}", CHANNEL_COUNT - 1),
                    ));
                }
                set_channel_state(*channel, ChannelState::parse(state))
            }
            MessageCommand::ChannelGet { id } => get_channel_state(id),
            MessageCommand::PduState => get_pdu_state(),
            MessageCommand::PduConfig { args } => set_pdu_config(args),
            MessageCommand::Raw { params } => Message::new(params.iter().copied()),
        };
        Ok(message)
    }

    /// Whether the device answers this command.
    pub fn expects_response(&self) -> bool {
        matches!(
            self,
            MessageCommand::ChannelSet { .. }
                | MessageCommand::ChannelGet { .. }
                | MessageCommand::PduState
        )
    }
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Device host name or address.
    #[arg(long, env = "TMCP_HOST")]
    pub host: String,
    /// Device TCP port.
    #[arg(long, env = "TMCP_PORT")]
    pub port: u16,
    /// Timeout for connect, write and read (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Wait for and print the device's reply.
    #[arg(long)]
    pub wait: bool,
    #[command(subcommand)]
    pub message: MessageCommand,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub message: MessageCommand,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
