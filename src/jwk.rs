//! Public key JSON Web Key representation embedded in token headers.
//! Used by: token::header, signer.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rsa::RsaPublicKey;
use rsa::traits::PublicKeyParts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kty")]
pub enum Jwk {
    #[serde(rename = "RSA")]
    Rsa {
        kid: String,
        alg: String,
        n: String,
        e: String,
    },
    #[serde(rename = "OKP")]
    Okp {
        kid: String,
        alg: String,
        crv: String,
        x: String,
    },
}

impl Jwk {
    pub fn from_rsa(kid: &str, key: &RsaPublicKey) -> Self {
        Jwk::Rsa {
            kid: kid.to_owned(),
            alg: "RS256".into(),
            n: URL_SAFE_NO_PAD.encode(key.n().to_bytes_be()),
            e: URL_SAFE_NO_PAD.encode(key.e().to_bytes_be()),
        }
    }

    pub fn from_ed25519(kid: &str, key: &ed25519_dalek::VerifyingKey) -> Self {
        Jwk::Okp {
            kid: kid.to_owned(),
            alg: "EdDSA".into(),
            crv: "Ed25519".into(),
            x: URL_SAFE_NO_PAD.encode(key.as_bytes()),
        }
    }

    pub fn kid(&self) -> &str {
        match self {
            Jwk::Rsa { kid, .. } | Jwk::Okp { kid, .. } => kid,
        }
    }
}
