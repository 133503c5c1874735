//! Compact token assembly and signing.
//! Used by: token::request, main.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::Result;
use crate::signer::{SignerError, TokenSigner};
use crate::token::claims::Payload;
use crate::token::header::Header;

/// `base64url(header) "." base64url(payload)`, the bytes the signature covers.
pub fn signing_input(header: &Header, payload: &Payload) -> Result<String> {
    let encoded_header = URL_SAFE_NO_PAD.encode(header.to_json()?);
    let encoded_payload = URL_SAFE_NO_PAD.encode(payload.to_json()?);
    Ok(format!("{}.{}", encoded_header, encoded_payload))
}

/// Signs `header` and `payload` with `signer` and returns the three-segment token.
///
/// Fails with [`Error::Signing`](crate::error::Error::Signing) when the header
/// algorithm does not match the signer or the signer rejects the input. The
/// signer is called at most once and no partial token is ever returned.
pub fn sign_token<S>(signer: &S, header: &Header, payload: &Payload) -> Result<String>
where
    S: TokenSigner + ?Sized,
{
    if header.algorithm() != signer.algorithm() {
        tracing::warn!(
            kid = %header.key_id(),
            header_alg = %header.algorithm(),
            signer_alg = %signer.algorithm(),
            "refusing to sign with mismatched algorithm"
        );
        return Err(SignerError::AlgorithmMismatch {
            header: header.algorithm().to_owned(),
            signer: signer.algorithm().to_owned(),
        }
        .into());
    }

    let data = signing_input(header, payload)?;
    let signature = signer
        .sign(data.as_bytes())
        .inspect_err(|e| tracing::warn!(kid = %header.key_id(), error = %e, "token signing failed"))?;
    let encoded_signature = URL_SAFE_NO_PAD.encode(signature);

    tracing::debug!(
        typ = %header.purpose(),
        kid = %header.key_id(),
        alg = %header.algorithm(),
        action = %payload.action(),
        "challenge token signed"
    );
    Ok(format!("{}.{}", data, encoded_signature))
}
