/*
[INPUT]:  Wire-format schema for chain-native JWS tokens
[OUTPUT]: Typed header/payload/token structs and the algorithm identifier
[POS]:    Data layer - token model shared by codec, registry and auth service
[UPDATE]: When the wire format grows fields or a new algorithm family lands
*/

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{AuthError, Result};

/// Lifetime of a freshly generated claim, in milliseconds
pub const DEFAULT_TTL_MS: i64 = 5000;

/// Identifier of a supported signature scheme
///
/// Closed set: the registry is keyed by this enum, so dispatch never goes
/// through raw strings. A new chain family means a new variant plus a new
/// [`crate::registry::SignatureAlgorithm`] impl; call sites stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlgorithmId {
    Eth,
    Tz,
}

impl AlgorithmId {
    /// Wire name of the algorithm as it appears in the token header
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Eth => "ETH",
            AlgorithmId::Tz => "TZ",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "ETH" => Ok(AlgorithmId::Eth),
            "TZ" => Ok(AlgorithmId::Tz),
            other => Err(AuthError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Token header: algorithm family plus the JWT type marker
///
/// `typ` is `"JWT"` for every token this crate mints. The ETH scheme is not
/// part of the JWT RFC, so this is JWT-shaped rather than a real JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    pub alg: AlgorithmId,
    pub typ: String,
}

impl JwsHeader {
    /// Create a header for the given algorithm
    pub fn new(alg: AlgorithmId) -> Self {
        Self {
            alg,
            typ: "JWT".to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.typ.is_empty() {
            return Err(AuthError::format("Header is not a valid jws header"));
        }
        Ok(())
    }
}

/// Header as it arrives off the wire, before algorithm resolution
///
/// Kept stringly so that a structurally valid header naming an unknown
/// algorithm surfaces as UnsupportedAlgorithm, not as a format error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawHeader {
    #[serde(default)]
    pub alg: String,
    #[serde(default)]
    pub typ: String,
}

/// Token payload: the claim being signed
///
/// `iss` carries the raw public key string the caller claims to control, in
/// the encoding native to its algorithm family (0x-hex for ETH, base58check
/// for TZ). Field order is the canonical JSON key order on the wire; do not
/// reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsPayload {
    /// Mint date, unix milliseconds
    pub iat: i64,
    /// Expiry date, unix milliseconds
    pub exp: i64,
    /// Public key the sender claims to control
    pub iss: String,
    /// Expected receiver
    pub aud: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// A chain-native JWS token
///
/// Immutable value: unsigned when freshly minted, signed once a signature is
/// attached. Every transformation produces a new value; nothing mutates a
/// token in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jws {
    pub header: JwsHeader,
    pub payload: JwsPayload,
    pub signature: Option<String>,
}

impl Jws {
    /// Generate a fresh unsigned claim with the default lifetime
    pub fn generate(public_key: &str, aud: &str, alg: AlgorithmId) -> Self {
        Self::generate_with_ttl(public_key, aud, alg, DEFAULT_TTL_MS)
    }

    /// Generate a fresh unsigned claim expiring `ttl_ms` after now
    pub fn generate_with_ttl(public_key: &str, aud: &str, alg: AlgorithmId, ttl_ms: i64) -> Self {
        let iat = Utc::now().timestamp_millis();

        Self {
            header: JwsHeader::new(alg),
            payload: JwsPayload {
                iat,
                exp: iat + ttl_ms,
                iss: public_key.to_string(),
                aud: aud.to_string(),
                jti: None,
            },
            signature: None,
        }
    }

    /// Decode a wire-encoded token without verifying it
    ///
    /// Structural failures (segment count, base64, JSON shape, empty header
    /// fields) surface as Format errors before the algorithm identifier is
    /// resolved, so an unknown algorithm in an otherwise well-formed header
    /// reports UnsupportedAlgorithm.
    pub fn decode(token: &str) -> Result<Self> {
        let (header_seg, payload_seg, signature) = codec::split_token(token)?;

        let raw: RawHeader = codec::decode_segment(header_seg)?;
        let payload: JwsPayload = codec::decode_segment(payload_seg)?;

        if raw.alg.is_empty() || raw.typ.is_empty() {
            return Err(AuthError::format("Header is not a valid jws header"));
        }

        let alg = raw.alg.parse::<AlgorithmId>()?;

        Ok(Self {
            header: JwsHeader { alg, typ: raw.typ },
            payload,
            signature: Some(signature.to_string()),
        })
    }

    /// Canonical unsigned form: `base64(header) + "." + base64(payload)`
    pub fn encode_unsigned(&self) -> Result<String> {
        codec::assemble_unsigned(&self.header, &self.payload)
    }

    /// Public key the token claims to be issued by
    pub fn issuer(&self) -> &str {
        &self.payload.iss
    }

    /// Algorithm family the token was minted under
    pub fn algorithm(&self) -> AlgorithmId {
        self.header.alg
    }

    /// Check that `sender` matches the claimed issuer key
    pub fn check_sender(&self, sender: &str) -> bool {
        sender == self.payload.iss
    }
}

/// Outcome of authenticating a wire-encoded token
///
/// `address` is derived from the claimed issuer key and is populated on
/// rejection too whenever derivable, so audit logs can name the rejected
/// claimant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReport {
    pub success: bool,
    pub jws: Jws,
    pub address: String,
    pub error_message: Option<String>,
}
