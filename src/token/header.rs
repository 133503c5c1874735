//! Token header: purpose tag, key id, algorithm and optional public key.
//! Used by: token::sign, token::request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::jwk::Jwk;

/// Closed set of request types, serialized as the header `typ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPurpose {
    #[serde(rename = "vnd.authgear.anonymous-request")]
    AnonymousRequest,
    #[serde(rename = "vnd.authgear.biometric-request")]
    BiometricRequest,
}

impl TokenPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnonymousRequest => "vnd.authgear.anonymous-request",
            Self::BiometricRequest => "vnd.authgear.biometric-request",
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenPurpose {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "anonymous" | "vnd.authgear.anonymous-request" => Ok(Self::AnonymousRequest),
            "biometric" | "vnd.authgear.biometric-request" => Ok(Self::BiometricRequest),
            other => Err(Error::Config(format!("unknown token purpose: {other}"))),
        }
    }
}

/// Serializes as `{"typ","kid","alg"[,"jwk"]}` in that order. `jwk` is
/// omitted entirely when no public key is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    #[serde(rename = "typ")]
    purpose: TokenPurpose,
    #[serde(rename = "kid")]
    key_id: String,
    #[serde(rename = "alg")]
    algorithm: String,
    #[serde(rename = "jwk", skip_serializing_if = "Option::is_none")]
    public_key: Option<Jwk>,
}

impl Header {
    pub fn new(purpose: TokenPurpose, key_id: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            purpose,
            key_id: key_id.into(),
            algorithm: algorithm.into(),
            public_key: None,
        }
    }

    pub fn with_public_key(mut self, jwk: Jwk) -> Self {
        self.public_key = Some(jwk);
        self
    }

    pub fn purpose(&self) -> TokenPurpose {
        self.purpose
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn public_key(&self) -> Option<&Jwk> {
        self.public_key.as_ref()
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
