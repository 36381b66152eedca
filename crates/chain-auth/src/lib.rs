/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public chain-auth crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod codec;
pub mod error;
pub mod eth;
pub mod expiry;
pub mod registry;
pub mod types;
pub mod tz;

// Re-export the service entry points
pub use auth::{
    authenticate,
    issue,
    sign_jws,
};

// Re-export the claim cut used by external verifiers
pub use codec::trim_signature;

// Re-export commonly used types from error
pub use error::{
    AuthError,
    Result,
};

// Re-export the per-chain descriptors and their registry
pub use eth::EthAlgorithm;
pub use registry::{
    SignatureAlgorithm,
    algorithm,
};
pub use tz::TzAlgorithm;

// Re-export all types
pub use types::*;
