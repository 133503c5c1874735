//! Environment configuration for the `challenge-jwt` binary.
//! Used by: main.

use std::path::PathBuf;

use ed25519_dalek::SigningKey;

use crate::error::{Error, Result};
use crate::signer::{new_key_id, Ed25519Signer, KeyHandle, RsaSigner};
use crate::token::{ChallengeRequest, TokenPurpose};

const ENV_CHALLENGE: &str = "CHALLENGE_JWT_CHALLENGE";
const ENV_ACTION: &str = "CHALLENGE_JWT_ACTION";
const ENV_PURPOSE: &str = "CHALLENGE_JWT_PURPOSE";
const ENV_KEY_FILE: &str = "CHALLENGE_JWT_KEY_FILE";
const ENV_KEY_ID: &str = "CHALLENGE_JWT_KEY_ID";
const ENV_INCLUDE_JWK: &str = "CHALLENGE_JWT_INCLUDE_JWK";

const DEFAULT_ACTION: &str = "login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Fresh Ed25519 key, discarded on exit.
    Ephemeral,
    /// PKCS#8 PEM RSA private key on disk.
    RsaPemFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub challenge: String,
    pub action: String,
    pub purpose: TokenPurpose,
    pub key: KeySource,
    pub key_id: Option<String>,
    pub include_jwk: Option<bool>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let challenge = lookup(ENV_CHALLENGE)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::Config(format!("{ENV_CHALLENGE} is not set")))?;
        let action = lookup(ENV_ACTION).unwrap_or_else(|| DEFAULT_ACTION.into());
        let purpose = match lookup(ENV_PURPOSE) {
            Some(p) => p.parse()?,
            None => TokenPurpose::AnonymousRequest,
        };
        let key = lookup(ENV_KEY_FILE)
            .map(|p| KeySource::RsaPemFile(PathBuf::from(p)))
            .unwrap_or(KeySource::Ephemeral);
        let include_jwk = lookup(ENV_INCLUDE_JWK)
            .map(|v| match v.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(Error::Config(format!("{ENV_INCLUDE_JWK} must be true or false, got {other}"))),
            })
            .transpose()?;

        Ok(Self {
            challenge,
            action,
            purpose,
            key,
            key_id: lookup(ENV_KEY_ID),
            include_jwk,
        })
    }

    pub fn request(&self) -> ChallengeRequest {
        let request = match self.purpose {
            TokenPurpose::AnonymousRequest => ChallengeRequest::anonymous(&*self.challenge, &*self.action),
            TokenPurpose::BiometricRequest => ChallengeRequest::biometric(&*self.challenge, &*self.action),
        };
        match self.include_jwk {
            Some(include) => request.with_public_key(include),
            None => request,
        }
    }

    pub fn load_signer(&self) -> Result<Box<dyn KeyHandle>> {
        let kid = self.key_id.clone().unwrap_or_else(new_key_id);
        match &self.key {
            KeySource::Ephemeral => {
                let key = SigningKey::generate(&mut rand::thread_rng());
                Ok(Box::new(Ed25519Signer::new(kid, key)))
            }
            KeySource::RsaPemFile(path) => {
                let pem = std::fs::read_to_string(path)
                    .map_err(|e| Error::Key(format!("cannot read {}: {e}", path.display())))?;
                tracing::info!(path = %path.display(), kid = %kid, "loaded RSA signing key");
                Ok(Box::new(RsaSigner::from_pkcs8_pem(kid, &pem)?))
            }
        }
    }
}
