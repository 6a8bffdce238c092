use std::time::Instant;

use serde::Serialize;

use crate::cmd::send::{open, runtime};
use crate::cmd::ProbeArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ProbeOutput {
    peer: String,
    connected: bool,
    latency_ms: u128,
}

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let connection = open(&args.connect)?;
    let runtime = runtime()?;

    let started = Instant::now();
    runtime
        .block_on(async {
            connection.connect().await?;
            connection.disconnect().await;
            Ok::<_, tmcp_client::ClientError>(())
        })
        .map_err(|err| client_error("probe failed", err))?;

    let out = ProbeOutput {
        peer: connection.addr(),
        connected: true,
        latency_ms: started.elapsed().as_millis(),
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("{}: connected in {}ms", out.peer, out.latency_ms)
        }
        OutputFormat::Raw => println!("ok"),
    }

    Ok(SUCCESS)
}
