//! Walk every PDU channel through KL30, KL15 and back to off.
//!
//! Run with:
//!   cargo run --example pdu-channels -- 192.168.0.51 5001

use std::time::Duration;

use tmcp::client::PduModule;
use tmcp::frame::{ChannelState, CHANNEL_COUNT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = args.next().as_deref().unwrap_or("5001").parse()?;

    let pdu = PduModule::new(host, port);
    pdu.start().await;

    for channel in 0..CHANNEL_COUNT {
        for state in [ChannelState::Kl30, ChannelState::Kl15, ChannelState::Off] {
            let reply = pdu.set_channel(channel, state).await?;
            eprintln!(
                "channel {channel:>2} -> {state}: {}",
                String::from_utf8_lossy(&reply).trim_end()
            );
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    }

    let state = pdu.get_state().await?;
    eprintln!("pdu state: {}", String::from_utf8_lossy(&state).trim_end());
    eprintln!("reconnects: {}", pdu.connection().reconnects());

    pdu.shutdown().await;
    Ok(())
}
