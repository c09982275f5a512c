//! Text decoding with a legacy 8-bit fallback.
//!
//! Quiz files come out of old word processors and e-mail attachments as
//! often as out of modern editors, so a strict UTF-8 read is not enough.
//! Decoding is attempted as UTF-8 first; on failure the bytes are retried
//! as Windows-1251, the regional single-byte encoding these documents were
//! historically saved in.

use encoding_rs::WINDOWS_1251;

/// Decode input bytes to a string, trying UTF-8 then Windows-1251.
///
/// Returns `None` when both decodings report errors. A UTF-8 BOM is
/// stripped before decoding.
#[must_use]
pub fn decode(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }

    let (text, _, had_errors) = WINDOWS_1251.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}
