//! Unified error types for challenge-jwt.
//! Used by: token, signer, config, main.

use crate::signer::SignerError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("signing error: {0}")]
    Signing(#[from] SignerError),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("key error: {0}")]
    Key(String),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Signing failures may succeed on a later attempt (re-authentication,
    /// key becoming available). Everything else is a caller or programming error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Signing(SignerError::KeyUnavailable(_) | SignerError::Backend(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_unavailable_is_retryable() {
        let err = Error::from(SignerError::KeyUnavailable("locked".into()));
        assert!(err.is_retryable());
    }

    #[test]
    fn algorithm_mismatch_is_not_retryable() {
        let err = Error::from(SignerError::AlgorithmMismatch {
            header: "RS256".into(),
            signer: "EdDSA".into(),
        });
        assert!(!err.is_retryable());
    }

    #[test]
    fn config_error_is_not_retryable() {
        assert!(!Error::Config("missing".into()).is_retryable());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            Error::from(SignerError::KeyUnavailable("locked".into())).to_string(),
            "signing error: key unavailable: locked"
        );
        assert_eq!(Error::Key("bad pem".into()).to_string(), "key error: bad pem");
        assert_eq!(
            Error::Config("CHALLENGE_JWT_CHALLENGE is not set".into()).to_string(),
            "config error: CHALLENGE_JWT_CHALLENGE is not set"
        );
    }
}
