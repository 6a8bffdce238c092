mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tmcp", version, about = "TMCP device control CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::MessageCommand;

    #[test]
    fn parses_send_subcommand() {
        let cli = Cli::try_parse_from([
            "tmcp",
            "send",
            "--host",
            "10.0.0.5",
            "--port",
            "5000",
            "show",
            "Hello",
        ])
        .expect("send args should parse");

        match cli.command {
            Command::Send(args) => {
                assert_eq!(args.connect.host, "10.0.0.5");
                assert_eq!(args.connect.port, 5000);
                assert!(matches!(args.message, MessageCommand::Show { .. }));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_encode_channel_set() {
        let cli = Cli::try_parse_from(["tmcp", "encode", "channel-set", "3", "KL30"])
            .expect("encode args should parse");
        match cli.command {
            Command::Encode(args) => {
                assert!(matches!(args.message, MessageCommand::ChannelSet { channel: 3, .. }))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_raw_negative_params() {
        let cli = Cli::try_parse_from(["tmcp", "encode", "raw", "0", "-1", "7"])
            .expect("raw params should parse");
        match cli.command {
            Command::Encode(args) => assert_eq!(
                args.message,
                MessageCommand::Raw {
                    params: vec![0, -1, 7]
                }
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn send_requires_host() {
        let err = Cli::try_parse_from(["tmcp", "send", "--port", "5000", "clear"])
            .expect_err("missing host should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
