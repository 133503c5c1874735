//! Ed25519 (`EdDSA`) signing with an in-process key.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};

use crate::jwk::Jwk;
use crate::signer::{new_key_id, KeyHandle, SignerError, TokenSigner};

pub const ALGORITHM: &str = "EdDSA";

pub struct Ed25519Signer {
    kid: String,
    key: SigningKey,
}

impl Ed25519Signer {
    pub fn new(kid: impl Into<String>, key: SigningKey) -> Self {
        Self { kid: kid.into(), key }
    }

    pub fn generate() -> Self {
        Self::new(new_key_id(), SigningKey::generate(&mut rand::thread_rng()))
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

impl std::fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Signer").field("kid", &self.kid).finish_non_exhaustive()
    }
}

impl TokenSigner for Ed25519Signer {
    fn algorithm(&self) -> &str {
        ALGORITHM
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let signature = self.key.try_sign(message).map_err(SignerError::backend)?;
        Ok(signature.to_bytes().to_vec())
    }
}

impl KeyHandle for Ed25519Signer {
    fn key_id(&self) -> &str {
        &self.kid
    }

    fn public_jwk(&self) -> Jwk {
        Jwk::from_ed25519(&self.kid, &self.key.verifying_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};

    #[test]
    fn signature_verifies_with_public_key() -> Result<(), SignerError> {
        let signer = Ed25519Signer::generate();
        let sig = signer.sign(b"header.payload")?;
        let signature = Signature::from_slice(&sig).map_err(SignerError::backend)?;
        assert!(signer.verifying_key().verify(b"header.payload", &signature).is_ok());
        Ok(())
    }

    #[test]
    fn signatures_are_deterministic() -> Result<(), SignerError> {
        let signer = Ed25519Signer::new("k1", SigningKey::from_bytes(&[3u8; 32]));
        assert_eq!(signer.sign(b"abc")?, signer.sign(b"abc")?);
        Ok(())
    }

    #[test]
    fn jwk_carries_key_id() {
        let signer = Ed25519Signer::new("device-key", SigningKey::from_bytes(&[3u8; 32]));
        assert_eq!(signer.public_jwk().kid(), "device-key");
        assert_eq!(signer.key_id(), "device-key");
    }

    #[test]
    fn debug_does_not_leak_key() {
        let signer = Ed25519Signer::new("k1", SigningKey::from_bytes(&[3u8; 32]));
        let rendered = format!("{signer:?}");
        assert!(rendered.contains("k1"));
        assert!(!rendered.contains("key:"));
    }
}
