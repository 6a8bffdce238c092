use std::time::Duration;

use tmcp_client::{ConnectionConfig, PersistentConnection};
use tokio::runtime::Runtime;

use crate::cmd::{ConnectArgs, SendArgs};
use crate::exit::{client_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_exchange, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let message = args.message.to_message()?;
    let expect_response = args.wait || args.message.expects_response();
    let connection = open(&args.connect)?;

    let runtime = runtime()?;
    let reply = runtime.block_on(async {
        let reply = connection.send(&message, expect_response).await;
        connection.disconnect().await;
        reply
    });
    let reply = reply.map_err(|err| client_error("send failed", err))?;

    print_exchange(&message, &connection.addr(), reply.as_deref(), format);
    Ok(SUCCESS)
}

/// Build the connection described by the shared `--host/--port/--timeout` flags.
pub(crate) fn open(args: &ConnectArgs) -> CliResult<PersistentConnection> {
    let timeout = parse_duration(&args.timeout)?;
    let config = ConnectionConfig::default().with_timeout(Some(timeout));
    Ok(PersistentConnection::with_config(
        args.host.clone(),
        args.port,
        config,
    ))
}

pub(crate) fn runtime() -> CliResult<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| io_error("failed starting runtime", err))
}

pub(crate) fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, millis) = match input.strip_suffix("ms") {
        Some(num) => (num, true),
        None => (input.strip_suffix('s').unwrap_or(input), false),
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;
    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    Ok(if millis {
        Duration::from_millis(value)
    } else {
        Duration::from_secs(value)
    })
}
