/*
[INPUT]:  Wire-encoded tokens, or claims plus secret keys
[OUTPUT]: Authentication reports and freshly signed tokens
[POS]:    Service layer - issue / authenticate protocol
[UPDATE]: When the accept/reject decision order or report shape changes
*/

use chrono::Utc;
use tracing::{debug, trace};

use crate::codec;
use crate::error::Result;
use crate::expiry;
use crate::registry;
use crate::types::{AlgorithmId, AuthReport, Jws, JwsHeader, JwsPayload};

/// Verify a wire-encoded token and report the outcome
///
/// Malformed tokens and unknown algorithms are errors: they indicate a
/// protocol violation upstream, not a caller that failed to authenticate.
/// Expired tokens and invalid signatures are business outcomes, reported
/// with `success: false`. Expiry is decided before signature validity so
/// an expired token never reveals whether its signature would have
/// verified.
pub fn authenticate(token: &str) -> Result<AuthReport> {
    let jws = Jws::decode(token)?;

    // The signature covers the exact incoming bytes, so the claim is cut
    // from the original string, never re-encoded.
    let claim = codec::trim_signature(token);
    let signature = jws.signature.as_deref().unwrap_or("");
    let descriptor = registry::algorithm(jws.algorithm());

    let signature_valid = descriptor.verify(claim, signature, jws.issuer());
    let address = descriptor.address_from_public_key(jws.issuer());

    let now = Utc::now().timestamp_millis();

    let report = if expiry::is_expired(&jws.payload, now) {
        debug!(issuer = %jws.issuer(), %address, "rejected expired jws");
        AuthReport {
            success: false,
            jws,
            address,
            error_message: Some("Jws has expired".to_string()),
        }
    } else if !signature_valid {
        debug!(issuer = %jws.issuer(), %address, "rejected jws signature");
        AuthReport {
            success: false,
            jws,
            address,
            error_message: Some("Invalid signature".to_string()),
        }
    } else {
        trace!(issuer = %jws.issuer(), %address, "authenticated jws");
        AuthReport {
            success: true,
            jws,
            address,
            error_message: None,
        }
    };

    Ok(report)
}

/// Build and sign a token for `payload` under the given algorithm
pub fn issue(payload: JwsPayload, algorithm_id: AlgorithmId, secret_key: &str) -> Result<String> {
    let jws = Jws {
        header: JwsHeader::new(algorithm_id),
        payload,
        signature: None,
    };

    sign_jws(&jws, secret_key)
}

/// Sign an unsigned claim and return the wire-encoded token
pub fn sign_jws(jws: &Jws, secret_key: &str) -> Result<String> {
    jws.header.validate()?;

    let unsigned = jws.encode_unsigned()?;
    let signature = registry::algorithm(jws.algorithm()).sign(&unsigned, secret_key)?;

    trace!(algorithm = %jws.algorithm(), issuer = %jws.issuer(), "issued jws");

    Ok(format!("{unsigned}.{signature}"))
}
