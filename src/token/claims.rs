//! Challenge claims carried in the token payload.
//! Used by: token::sign, token::request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// Tokens are valid for a fixed window after issuance.
pub const VALIDITY_SECONDS: i64 = 60;

// TODO: biometric requests should eventually carry device info once the
// server accepts it; the payload stays at four claims until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(rename = "iat")]
    issued_at: i64,
    #[serde(rename = "exp")]
    expires_at: i64,
    challenge: String,
    action: String,
}

impl Payload {
    pub fn new(now: DateTime<Utc>, challenge: impl Into<String>, action: impl Into<String>) -> Self {
        let issued_at = now.timestamp();
        Self {
            issued_at,
            expires_at: issued_at + VALIDITY_SECONDS,
            challenge: challenge.into(),
            action: action.into(),
        }
    }

    pub fn now(challenge: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(Utc::now(), challenge, action)
    }

    pub fn issued_at(&self) -> i64 {
        self.issued_at
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
