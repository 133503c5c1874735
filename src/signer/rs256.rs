//! RSASSA-PKCS1-v1_5 with SHA-256 (`RS256`) signing with an in-process key.

use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::jwk::Jwk;
use crate::signer::{new_key_id, KeyHandle, SignerError, TokenSigner};

pub const ALGORITHM: &str = "RS256";
const KEY_BITS: usize = 2048;

pub struct RsaSigner {
    kid: String,
    key: SigningKey<Sha256>,
    public: RsaPublicKey,
}

impl RsaSigner {
    pub fn new(kid: impl Into<String>, private_key: RsaPrivateKey) -> Self {
        let public = private_key.to_public_key();
        Self {
            kid: kid.into(),
            key: SigningKey::<Sha256>::new(private_key),
            public,
        }
    }

    pub fn generate() -> Result<Self> {
        let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), KEY_BITS)
            .map_err(|e| Error::Key(format!("failed to generate RSA key: {e}")))?;
        Ok(Self::new(new_key_id(), private_key))
    }

    pub fn from_pkcs8_pem(kid: impl Into<String>, pem: &str) -> Result<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| Error::Key(format!("invalid PKCS#8 RSA key: {e}")))?;
        Ok(Self::new(kid, private_key))
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner").field("kid", &self.kid).finish_non_exhaustive()
    }
}

impl TokenSigner for RsaSigner {
    fn algorithm(&self) -> &str {
        ALGORITHM
    }

    fn sign(&self, message: &[u8]) -> std::result::Result<Vec<u8>, SignerError> {
        let signature = self.key.try_sign(message).map_err(SignerError::backend)?;
        Ok(signature.to_vec())
    }
}

impl KeyHandle for RsaSigner {
    fn key_id(&self) -> &str {
        &self.kid
    }

    fn public_jwk(&self) -> Jwk {
        Jwk::from_rsa(&self.kid, &self.public)
    }
}

#[cfg(test)]
pub(crate) const TEST_KEY_PEM: &str = include_str!("testdata/rs256_test_key.pem");
