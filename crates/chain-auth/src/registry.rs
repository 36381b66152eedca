/*
[INPUT]:  Algorithm identifier from a token header
[OUTPUT]: The signature scheme primitives registered for that identifier
[POS]:    Dispatch layer - immutable algorithm table
[UPDATE]: When adding a new signature scheme
*/

use crate::error::Result;
use crate::eth::EthAlgorithm;
use crate::types::AlgorithmId;
use crate::tz::TzAlgorithm;

/// One signature scheme: sign, verify, derive an account address
///
/// Implement this trait for each chain family. Implementations must be
/// pure, deterministic and total: `verify` answers `false` and
/// `address_from_public_key` answers `""` on malformed input instead of
/// failing, so the authentication path can always report an outcome.
pub trait SignatureAlgorithm: Send + Sync {
    /// Check `signature` over the exact `claim` bytes against `public_key`
    fn verify(&self, claim: &str, signature: &str, public_key: &str) -> bool;

    /// Produce the scheme's native text-encoded signature over `message`
    fn sign(&self, message: &str, secret_key: &str) -> Result<String>;

    /// Derive the account address for `public_key`, or `""` if malformed
    fn address_from_public_key(&self, public_key: &str) -> String;
}

static ETH: EthAlgorithm = EthAlgorithm;
static TZ: TzAlgorithm = TzAlgorithm;

/// Look up the registered primitives for an algorithm
///
/// The table is fixed at compile time and never mutated, so lookups are
/// lock-free and safe from any number of threads. The closed
/// [`AlgorithmId`] enum makes the lookup total; unknown algorithm names
/// are rejected earlier, when the header is resolved.
pub fn algorithm(id: AlgorithmId) -> &'static dyn SignatureAlgorithm {
    match id {
        AlgorithmId::Eth => &ETH,
        AlgorithmId::Tz => &TZ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_resolves() {
        for id in [AlgorithmId::Eth, AlgorithmId::Tz] {
            let descriptor = algorithm(id);
            // Total on garbage input per the trait contract.
            assert_eq!(descriptor.address_from_public_key("not a key"), "");
            assert!(!descriptor.verify("claim", "not a signature", "not a key"));
        }
    }

    #[test]
    fn test_sign_rejects_garbage_keys() {
        for id in [AlgorithmId::Eth, AlgorithmId::Tz] {
            assert!(algorithm(id).sign("message", "not a key").is_err());
        }
    }
}
