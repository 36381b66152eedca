/*
[INPUT]:  Base58check-encoded ed25519 keys, claims and signatures
[OUTPUT]: TZ-scheme signing, verification and tz1 account addresses
[POS]:    Algorithm layer - Tezos-style descriptor
[UPDATE]: When supported key kinds or network prefixes change
*/

use blake2::Blake2bVar;
use blake2::digest::{Update, VariableOutput};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::{AuthError, Result};
use crate::registry::SignatureAlgorithm;

/// Tezos network prefixes, prepended to raw bytes before base58check
pub mod prefix {
    pub const TZ1: [u8; 3] = [6, 161, 159];
    pub const TZ2: [u8; 3] = [6, 161, 161];
    pub const TZ3: [u8; 3] = [6, 161, 164];
    /// ed25519 public key (`edpk…`)
    pub const EDPK: [u8; 4] = [13, 15, 37, 217];
    /// ed25519 secret key, 64-byte seed‖public form (`edsk…`, 98 chars)
    pub const EDSK: [u8; 4] = [43, 246, 78, 7];
    /// ed25519 signature (`edsig…`)
    pub const EDSIG: [u8; 5] = [9, 245, 205, 134, 18];
}

/// Tezos-style scheme: ed25519 over raw claim bytes
///
/// Keys, signatures and addresses all travel as base58check text with
/// their network prefixes. Signing consumes the 64-byte `edsk…` secret
/// key form; verification takes `edpk…` keys and `edsig…` signatures.
#[derive(Debug, Clone, Copy)]
pub struct TzAlgorithm;

impl SignatureAlgorithm for TzAlgorithm {
    fn verify(&self, claim: &str, signature: &str, public_key: &str) -> bool {
        let Ok(pk_bytes) = base58check_decode(public_key, &prefix::EDPK) else {
            return false;
        };
        let Ok(sig_bytes) = base58check_decode(signature, &prefix::EDSIG) else {
            return false;
        };

        let Ok(pk_raw) = <[u8; 32]>::try_from(pk_bytes.as_slice()) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&pk_raw) else {
            return false;
        };
        let Ok(sig_raw) = <[u8; 64]>::try_from(sig_bytes.as_slice()) else {
            return false;
        };

        verifying_key
            .verify(claim.as_bytes(), &Signature::from_bytes(&sig_raw))
            .is_ok()
    }

    fn sign(&self, message: &str, secret_key: &str) -> Result<String> {
        let signing_key = parse_secret_key(secret_key)?;
        let signature = signing_key.sign(message.as_bytes());

        Ok(base58check_encode(&signature.to_bytes(), &prefix::EDSIG))
    }

    fn address_from_public_key(&self, public_key: &str) -> String {
        let Ok(pk_bytes) = base58check_decode(public_key, &prefix::EDPK) else {
            return String::new();
        };
        let Some(digest) = blake2b_160(&pk_bytes) else {
            return String::new();
        };

        base58check_encode(&digest, &prefix::TZ1)
    }
}

/// Derive the `edpk…` public key embedded in an `edsk…` secret key
pub fn public_key_from_secret(secret_key: &str) -> Result<String> {
    let signing_key = parse_secret_key(secret_key)?;

    Ok(base58check_encode(
        signing_key.verifying_key().as_bytes(),
        &prefix::EDPK,
    ))
}

fn parse_secret_key(secret_key: &str) -> Result<SigningKey> {
    let bytes = base58check_decode(secret_key, &prefix::EDSK)?;
    let keypair: [u8; 64] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| AuthError::key(format!("Invalid TZ secret key length: {}", bytes.len())))?;

    SigningKey::from_keypair_bytes(&keypair)
        .map_err(|e| AuthError::key(format!("Invalid TZ secret key: {e}")))
}

fn base58check_encode(payload: &[u8], prefix: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len());
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);

    bs58::encode(data).with_check().into_string()
}

fn base58check_decode(value: &str, prefix: &[u8]) -> Result<Vec<u8>> {
    let bytes = bs58::decode(value)
        .with_check(None)
        .into_vec()
        .map_err(|e| AuthError::key(format!("Invalid base58check value: {e}")))?;

    bytes
        .strip_prefix(prefix)
        .map(<[u8]>::to_vec)
        .ok_or_else(|| AuthError::key("Unexpected base58check prefix"))
}

fn blake2b_160(data: &[u8]) -> Option<[u8; 20]> {
    let mut hasher = Blake2bVar::new(20).ok()?;
    hasher.update(data);

    let mut digest = [0u8; 20];
    hasher.finalize_variable(&mut digest).ok()?;
    Some(digest)
}
