/*
[INPUT]:  None (fixed demonstration keys)
[OUTPUT]: Console output of issued tokens and authentication reports
[POS]:    Examples - issue / authenticate flow demonstration
[UPDATE]: When the issue or authenticate API changes
*/

//! Example: Issue a token under each chain scheme and authenticate it
//!
//! Demonstrates the full round trip: derive the public key from a secret,
//! generate a claim, sign it, and verify the wire token.

use chain_auth::{AlgorithmId, Jws, authenticate, eth, issue, sign_jws, trim_signature, tz};

// Test keys - DO NOT USE IN PRODUCTION
const ETH_SECRET: &str = "0x459975a29bf64c03a92388f8ae50bdc7eb7df4ff5ede58c58c626fa9be67a76a";
const TZ_SECRET: &str = "edskS5s6m6ACFPoNaNJY5xfrSBvKDdbCjFPTq5BiF23rmLL7zxc8tBhyzqorapc6gXofoNSKh1N17aBPYc5mhQXqUJ47TPZ6tg";

const AUDIENCE: &str = "https://api.example.com";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Chain Auth Example ===\n");

    // Step 1: Ethereum-style round trip
    let eth_pk = eth::public_key_from_secret(ETH_SECRET)?;
    let jws = Jws::generate(&eth_pk, AUDIENCE, AlgorithmId::Eth);
    let eth_token = sign_jws(&jws, ETH_SECRET)?;
    println!("✓ ETH token issued: {eth_token}");

    let report = authenticate(&eth_token)?;
    println!("  success: {}, address: {}", report.success, report.address);

    // Step 2: Tezos-style round trip, minting through issue()
    let tz_pk = tz::public_key_from_secret(TZ_SECRET)?;
    let jws = Jws::generate_with_ttl(&tz_pk, AUDIENCE, AlgorithmId::Tz, 60_000);
    let tz_token = issue(jws.payload, AlgorithmId::Tz, TZ_SECRET)?;
    println!("\n✓ TZ token issued: {tz_token}");

    let report = authenticate(&tz_token)?;
    println!("  success: {}, address: {}", report.success, report.address);

    // Step 3: A swapped-out signature is rejected, not an error
    let forged = format!("{}.{}", trim_signature(&eth_token), "0xdeadbeef");
    let report = authenticate(&forged)?;
    println!("\n✓ Forged token rejected: {:?}", report.error_message);

    // Step 4: An expired claim is rejected before its signature is checked
    let jws = Jws::generate_with_ttl(&eth_pk, AUDIENCE, AlgorithmId::Eth, -1);
    let stale_token = sign_jws(&jws, ETH_SECRET)?;
    let report = authenticate(&stale_token)?;
    println!("✓ Expired token rejected: {:?}", report.error_message);

    println!("\n✓ Example complete");
    Ok(())
}
