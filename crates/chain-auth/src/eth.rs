/*
[INPUT]:  Hex-encoded secp256k1 keys, claims and personal-message signatures
[OUTPUT]: ETH-scheme signing, recovery-based verification, checksum addresses
[POS]:    Algorithm layer - Ethereum-style descriptor
[UPDATE]: When signing conventions or address formatting change
*/

use std::str::FromStr;

use alloy_primitives::{Address, Signature};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

use crate::error::{AuthError, Result};
use crate::registry::SignatureAlgorithm;

/// Ethereum-style scheme: personal-message secp256k1 signatures
///
/// Verification recovers the signing key from the signature and compares
/// it to the claimed public key after hex normalization. The comparison is
/// at the public-key level, not the address level; tokens claim raw keys
/// in `iss`, and the derived address is reported separately.
#[derive(Debug, Clone, Copy)]
pub struct EthAlgorithm;

impl SignatureAlgorithm for EthAlgorithm {
    fn verify(&self, claim: &str, signature: &str, public_key: &str) -> bool {
        let Ok(signature) = Signature::from_str(signature) else {
            return false;
        };

        // EIP-191 prefixes the claim before hashing, matching sign().
        let Ok(recovered) = signature.recover_from_msg(claim.as_bytes()) else {
            return false;
        };

        let point = recovered.to_encoded_point(false);
        let recovered_hex = hex::encode(&point.as_bytes()[1..]);

        normalize_hex(public_key) == recovered_hex
    }

    fn sign(&self, message: &str, secret_key: &str) -> Result<String> {
        let signer = parse_secret_key(secret_key)?;
        let signature = signer
            .sign_message_sync(message.as_bytes())
            .map_err(|e| AuthError::key(format!("ETH signing failed: {e}")))?;

        // 65 bytes r || s || v, v in {27, 28}
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }

    fn address_from_public_key(&self, public_key: &str) -> String {
        let Ok(bytes) = hex::decode(normalize_hex(public_key)) else {
            return String::new();
        };

        if bytes.len() != 64 {
            return String::new();
        }

        Address::from_raw_public_key(&bytes).to_checksum(None)
    }
}

/// Derive the 64-byte uncompressed public key for a secret key, 0x-hex
///
/// Issuers put this value in the `iss` claim of the tokens they mint.
pub fn public_key_from_secret(secret_key: &str) -> Result<String> {
    let signer = parse_secret_key(secret_key)?;
    let point = signer.credential().verifying_key().to_encoded_point(false);

    Ok(format!("0x{}", hex::encode(&point.as_bytes()[1..])))
}

/// Parse a hex secret key, with or without the `0x` prefix
fn parse_secret_key(secret_key: &str) -> Result<PrivateKeySigner> {
    let secret_key = secret_key.strip_prefix("0x").unwrap_or(secret_key);
    PrivateKeySigner::from_str(secret_key)
        .map_err(|e| AuthError::key(format!("Invalid ETH secret key: {e}")))
}

fn normalize_hex(value: &str) -> String {
    let value = value.trim();
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
        .to_ascii_lowercase()
}
