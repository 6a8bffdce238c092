use std::io::{IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tmcp_frame::{ntype, Checksum, Message};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput<'a> {
    ntype: Option<i64>,
    ntype_name: &'static str,
    params: &'a [i64],
    payload: String,
    checksum: String,
    frame: String,
}

impl<'a> FrameOutput<'a> {
    fn new(message: &'a Message) -> Self {
        let payload = message.payload();
        let checksum = Checksum::of(payload.as_bytes()).to_string();
        Self {
            ntype: message.ntype(),
            ntype_name: ntype::name(message.ntype().unwrap_or_default()),
            params: message.params(),
            payload,
            checksum,
            frame: message.to_frame_string(),
        }
    }
}

#[derive(Serialize)]
struct ExchangeOutput<'a> {
    peer: &'a str,
    sent: FrameOutput<'a>,
    response_size: Option<usize>,
    response: Option<String>,
    timestamp: String,
}

/// Print an encoded frame (no network involved).
pub fn print_frame(message: &Message, format: OutputFormat) {
    let out = FrameOutput::new(message);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NTYPE", "PARAMS", "CHECKSUM", "FRAME"])
                .add_row(vec![
                    out.ntype_name.to_string(),
                    out.payload.clone(),
                    out.checksum.clone(),
                    out.frame.trim_end().to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "ntype={} params={} checksum={} frame={}",
                out.ntype_name,
                out.params.len(),
                out.checksum,
                out.frame.escape_debug()
            );
        }
        OutputFormat::Raw => {
            print_raw(out.frame.as_bytes());
        }
    }
}

/// Print the outcome of a send, with the device's reply if one was read.
pub fn print_exchange(
    message: &Message,
    peer: &str,
    response: Option<&[u8]>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let out = ExchangeOutput {
                peer,
                sent: FrameOutput::new(message),
                response_size: response.map(<[u8]>::len),
                response: response.map(payload_preview),
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PEER", "NTYPE", "SENT", "RESPONSE"])
                .add_row(vec![
                    peer.to_string(),
                    ntype::name(message.ntype().unwrap_or_default()).to_string(),
                    message.to_string(),
                    response.map(payload_preview).unwrap_or_else(|| "-".to_string()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match response {
            Some(data) => println!(
                "peer={} sent={} response={}",
                peer,
                message,
                payload_preview(data).escape_debug()
            ),
            None => println!("peer={peer} sent={message}"),
        },
        OutputFormat::Raw => {
            if let Some(data) = response {
                print_raw(data);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmcp_frame::clear_text;

    #[test]
    fn frame_output_fields() {
        let message = clear_text();
        let out = FrameOutput::new(&message);
        assert_eq!(out.ntype, Some(11));
        assert_eq!(out.ntype_name, "OLED_CLEAR_TEXT");
        assert_eq!(out.payload, "0,11");
        assert_eq!(out.checksum, "77bb9fb1");
        assert_eq!(out.frame, "$0,11*77bb9fb1\r\n");
    }

    #[test]
    fn preview_marks_binary() {
        assert_eq!(payload_preview(b"ok"), "ok");
        assert_eq!(payload_preview(&[0xff, 0xfe]), "<binary 2 bytes>");
    }
}
