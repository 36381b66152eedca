/*
[INPUT]:  Token payload timestamps and the caller's clock
[OUTPUT]: Expired / still-valid decision
[POS]:    Validation layer - temporal window check
[UPDATE]: When the validity window semantics change
*/

use crate::types::JwsPayload;

/// Check whether a token is outside its validity window at `now_ms`
///
/// A token minted in the future (`now < iat`) is rejected exactly like an
/// expired one; both collapse into the single "expired" outcome upstream.
pub fn is_expired(payload: &JwsPayload, now_ms: i64) -> bool {
    if now_ms < payload.iat {
        return true;
    }

    now_ms > payload.exp
}
