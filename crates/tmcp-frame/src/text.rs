//! Fixed-width text payloads.
//!
//! Display modules take exactly 16 bytes of character data per update. Text
//! is UTF-8 encoded, left-aligned in a block pre-filled with `0x21` (`!`) and
//! sent as big-endian 16-bit words, one message parameter per word.

/// Size of the text block accepted by the devices.
pub const TEXT_BLOCK_SIZE: usize = 16;

/// Fill byte for unused block positions.
pub const PAD_BYTE: u8 = 0x21;

/// Pack `text` into `max_bytes / 2` big-endian words.
///
/// The text is first cut to `max_bytes` characters; its UTF-8 encoding is
/// then copied into a `pad`-filled buffer of `max_bytes` bytes, never past
/// the end of it. A trailing unpaired byte (odd `max_bytes`) is not emitted.
pub fn pad_and_pack_words(text: &str, max_bytes: usize, pad: u8) -> Vec<u16> {
    let mut block = vec![pad; max_bytes];

    let truncated: String = text.chars().take(max_bytes).collect();
    let encoded = truncated.as_bytes();
    let len = encoded.len().min(max_bytes);
    block[..len].copy_from_slice(&encoded[..len]);

    block
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

/// [`pad_and_pack_words`] with the device defaults (16 bytes, `0x21`).
pub fn pack_text(text: &str) -> Vec<u16> {
    pad_and_pack_words(text, TEXT_BLOCK_SIZE, PAD_BYTE)
}
