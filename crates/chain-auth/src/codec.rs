/*
[INPUT]:  Header/payload values and wire-encoded token strings
[OUTPUT]: Canonical base64 segments, assembled/split/trimmed token strings
[POS]:    Codec layer - byte-exact canonical form that signatures cover
[UPDATE]: When the wire format or accepted base64 variants change
*/

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AuthError, Result};

/// Encode a value as a canonical base64 token segment
///
/// JSON key order follows struct field order, so a given value always
/// produces the same bytes and independently built signer and verifier
/// agree on the unsigned string.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a base64 token segment into a value
///
/// Encoding always emits unpadded url-safe base64, but tokens minted by
/// older issuers circulate with `=` padding or the standard alphabet, so
/// decoding tries the stricter engines first and falls back.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .or_else(|_| STANDARD.decode(segment))
        .map_err(|e| AuthError::format(format!("Segment is not valid base64: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::format(format!("Segment is not valid JSON: {e}")))
}

/// Assemble the canonical unsigned string: `header-segment.payload-segment`
pub fn assemble_unsigned<H: Serialize, P: Serialize>(header: &H, payload: &P) -> Result<String> {
    Ok(format!(
        "{}.{}",
        encode_segment(header)?,
        encode_segment(payload)?
    ))
}

/// Split a wire-encoded token into header, payload and signature segments
///
/// Exactly three non-empty segments are accepted. Extra segments are a
/// format error, not ignored; a token that can be extended past its
/// signature is a malformed token.
pub fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let mut segments = token.split('.');
    let header = segments.next().unwrap_or("");
    let payload = segments.next().unwrap_or("");
    let signature = segments.next().unwrap_or("");

    if segments.next().is_some() {
        return Err(AuthError::format("Jws has extra field"));
    }

    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(AuthError::format(
            "Missing jws required construction information",
        ));
    }

    Ok((header, payload, signature))
}

/// The exact bytes that were signed: the first two segments of the token
///
/// Verifiers must use this, never a re-serialization of the decoded
/// payload; re-encoding could change the byte layout and verify a
/// different string than the one the signature covers.
pub fn trim_signature(token: &str) -> &str {
    match token.match_indices('.').nth(1) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}
