/*
[INPUT]:  Fixed per-chain key material
[OUTPUT]: Shared test fixtures and forged-token helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new chain fixtures or forged-token helpers
*/

//! Common test fixtures for chain-auth tests

use chain_auth::AlgorithmId;
use chain_auth::codec;

/// Key material and expected outputs for one chain scheme
pub struct ChainFixture {
    pub algorithm: AlgorithmId,
    pub secret_key: &'static str,
    pub public_key: &'static str,
    pub address: &'static str,
}

pub fn eth_fixture() -> ChainFixture {
    ChainFixture {
        algorithm: AlgorithmId::Eth,
        secret_key: "0x459975a29bf64c03a92388f8ae50bdc7eb7df4ff5ede58c58c626fa9be67a76a",
        public_key: "0x58d9e3ac6ea256fa907db156e3a129f6b1228fc2a01748f2027706a79df5c90ca28f196d92c7417b90f520fef5f5c81d59ce745dfecce0e89b56d757f46f14dd",
        address: "0xe447fA2Bc17668112CAe2Dc7752387f695C322Cf",
    }
}

pub fn tz_fixture() -> ChainFixture {
    ChainFixture {
        algorithm: AlgorithmId::Tz,
        secret_key: "edskS5s6m6ACFPoNaNJY5xfrSBvKDdbCjFPTq5BiF23rmLL7zxc8tBhyzqorapc6gXofoNSKh1N17aBPYc5mhQXqUJ47TPZ6tg",
        public_key: "edpkuT4d9VwyPsLAsT4djGBnvjCjMzcbeogBRDGfWPPYSJVYrx89po",
        address: "tz1iCQzPkQYTBcbE4bEPHorN6neQYbch83yz",
    }
}

/// Claim emitted with padded base64 by an older issuer, plus a matching
/// signature from the eth fixture key
pub const KNOWN_ETH_CLAIM: &str = "eyJhbGciOiJFVEgiLCJ0eXAiOiJKV1QifQ==.eyJpYXQiOjAsImV4cCI6NTAwMTU5Njc5OTE4NzE2NiwiaXNzIjoiMHg1OGQ5ZTNhYzZlYTI1NmZhOTA3ZGIxNTZlM2ExMjlmNmIxMjI4ZmMyYTAxNzQ4ZjIwMjc3MDZhNzlkZjVjOTBjYTI4ZjE5NmQ5MmM3NDE3YjkwZjUyMGZlZjVmNWM4MWQ1OWNlNzQ1ZGZlY2NlMGU4OWI1NmQ3NTdmNDZmMTRkZCIsImF1ZCI6Imh0dHBzOi8vdG8ud2hvLml0Lm1heS5jb25jZXJuIn0=";

pub const KNOWN_ETH_SIGNATURE: &str = "0x5140dc90b169b2cfedeced8d39554b296ca782506ab0bd857502541ebfc3ea473842bfd7bda24bb3ae5dad2de1321531dfb250d8c6655e26d9446618582194461b";

/// Assemble a wire token from raw header and payload values
pub fn forge_token(
    header: &serde_json::Value,
    payload: &serde_json::Value,
    signature: &str,
) -> String {
    let head = codec::encode_segment(header).unwrap();
    let body = codec::encode_segment(payload).unwrap();
    format!("{head}.{body}.{signature}")
}
