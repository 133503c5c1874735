//! challenge-jwt: signed challenge tokens for anonymous and biometric login.
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`,
//! signed by a caller-provided [`signer::TokenSigner`].

pub mod config;
pub mod console;
pub mod error;
pub mod jwk;
pub mod signer;
pub mod token;

pub use error::{Error, Result};
pub use jwk::Jwk;
pub use signer::{Ed25519Signer, KeyHandle, RsaSigner, SignerError, TokenSigner};
pub use token::{sign_token, ChallengeRequest, Header, Payload, TokenPurpose};
