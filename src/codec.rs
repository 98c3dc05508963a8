//! Binary-to-text codec for fields that cross the JSON boundary.
//!
//! The challenge, user handle, and attestation payloads are raw bytes, but
//! both registration endpoints speak JSON, so they travel as base64url text:
//! URL-safe alphabet (`-`/`_` in place of `+`/`/`), no padding. The relying
//! party re-decodes submissions with strict rules that reject the standard
//! alphabet and padding, so encoding must be bit-reproducible and decoding
//! must accept exactly the same alphabet we emit.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encodes raw bytes as unpadded base64url text.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded base64url text back to raw bytes.
///
/// `+`, `/`, or `=` anywhere in the input is a decode error.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(text)
}
