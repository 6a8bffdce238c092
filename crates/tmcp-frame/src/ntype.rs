//! Command tags (`NTYPE`), carried as the second message parameter.
//!
//! The numbering is fixed by the device firmware.

/// Set a power-distribution channel state.
pub const CON_STATE_SET: i64 = 1;

/// Channel state report (device → host).
pub const CON_STATE: i64 = 2;

/// Request a channel state.
pub const CON_STATE_GET: i64 = 3;

/// Request the PDU state.
pub const PDU_STATE_GET: i64 = 4;

/// PDU state report (device → host).
pub const PDU_STATE: i64 = 5;

/// Set PDU configuration.
pub const PDU_CONFIG_SET: i64 = 6;

/// Clear the OLED display.
pub const OLED_CLEAR_TEXT: i64 = 11;

/// Show text on the OLED display.
pub const OLED_SHOW_TEXT: i64 = 12;

/// Returns a human-readable name for a command tag.
pub fn name(tag: i64) -> &'static str {
    match tag {
        CON_STATE_SET => "CON_STATE_SET",
        CON_STATE => "CON_STATE",
        CON_STATE_GET => "CON_STATE_GET",
        PDU_STATE_GET => "PDU_STATE_GET",
        PDU_STATE => "PDU_STATE",
        PDU_CONFIG_SET => "PDU_CONFIG_SET",
        OLED_CLEAR_TEXT => "OLED_CLEAR_TEXT",
        OLED_SHOW_TEXT => "OLED_SHOW_TEXT",
        _ => "UNKNOWN",
    }
}
