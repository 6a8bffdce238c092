//! Show a line of text on an OLED module, then clear it.
//!
//! Run with:
//!   cargo run --example oled-text -- 192.168.0.50 5000 "Hello!"

use std::time::Duration;

use tmcp::client::OledModule;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = args.next().as_deref().unwrap_or("5000").parse()?;
    let text = args.next().unwrap_or_else(|| "Hello!".to_string());

    let oled = OledModule::new(host, port);
    if !oled.start().await {
        eprintln!("device not reachable yet, sends will retry");
    }

    oled.send_text(&text).await?;
    eprintln!("showing {text:?} on {}", oled.connection().addr());

    tokio::time::sleep(Duration::from_secs(3)).await;
    oled.clear_text().await?;
    oled.shutdown().await;
    Ok(())
}
