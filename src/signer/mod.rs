//! Signing capabilities that tokens are signed with.
//! Used by: token::sign, token::request, main.
//!
//! A [`TokenSigner`] is borrowed for a single signing call and never stored.
//! Implementations backed by hardware key stores may block while the platform
//! prompts for user presence, so call them off latency-sensitive threads.

pub mod eddsa;
pub mod rs256;

pub use eddsa::Ed25519Signer;
pub use rs256::RsaSigner;

use crate::jwk::Jwk;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("header alg {header} does not match signer alg {signer}")]
    AlgorithmMismatch { header: String, signer: String },

    #[error("key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("backend failure: {0}")]
    Backend(#[source] BoxError),
}

impl SignerError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SignerError::Backend(Box::new(err))
    }
}

/// Produces a detached signature over raw bytes with one private key.
pub trait TokenSigner {
    /// JWS algorithm name, e.g. `RS256` or `EdDSA`.
    fn algorithm(&self) -> &str;

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError>;
}

/// A provisioned key that can also describe itself in a token header.
pub trait KeyHandle: TokenSigner {
    fn key_id(&self) -> &str;

    fn public_jwk(&self) -> Jwk;
}

pub(crate) fn new_key_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
