//! Challenge requests signed with a provisioned key.
//! Used by: main.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::signer::KeyHandle;
use crate::token::claims::Payload;
use crate::token::header::{Header, TokenPurpose};
use crate::token::sign::sign_token;

/// What the caller wants proven: possession of a key against `challenge`
/// for `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub purpose: TokenPurpose,
    pub challenge: String,
    pub action: String,
    pub include_public_key: bool,
}

impl ChallengeRequest {
    /// Anonymous requests carry the public key so the server can register
    /// it on first use.
    pub fn anonymous(challenge: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            purpose: TokenPurpose::AnonymousRequest,
            challenge: challenge.into(),
            action: action.into(),
            include_public_key: true,
        }
    }

    /// Biometric requests reference an already enrolled key by id only.
    pub fn biometric(challenge: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            purpose: TokenPurpose::BiometricRequest,
            challenge: challenge.into(),
            action: action.into(),
            include_public_key: false,
        }
    }

    pub fn with_public_key(mut self, include: bool) -> Self {
        self.include_public_key = include;
        self
    }

    pub fn header_for<K: KeyHandle + ?Sized>(&self, key: &K) -> Header {
        let header = Header::new(self.purpose, key.key_id(), key.algorithm());
        if self.include_public_key {
            header.with_public_key(key.public_jwk())
        } else {
            header
        }
    }

    pub fn sign<K: KeyHandle + ?Sized>(&self, key: &K, now: DateTime<Utc>) -> Result<String> {
        let header = self.header_for(key);
        let payload = Payload::new(now, self.challenge.as_str(), self.action.as_str());
        sign_token(key, &header, &payload)
    }
}
