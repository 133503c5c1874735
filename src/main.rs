//! challenge-jwt: sign one challenge request and print the token.
//! Used by: binary entrypoint.

use challenge_jwt::config::Config;
use challenge_jwt::console;
use challenge_jwt::{KeyHandle, TokenSigner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from_env()?;
    let key = config.load_signer()?;
    let request = config.request();
    tracing::info!(typ = %request.purpose, kid = %key.key_id(), "signing challenge request");

    match request.sign(key.as_ref(), chrono::Utc::now()) {
        Ok(token) => {
            console::log_signed(request.purpose, key.key_id(), key.algorithm(), &request.action);
            println!("{}", token);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(retryable = e.is_retryable(), error = %e, "challenge request not signed");
            console::log_failure(&e.to_string());
            Err(e.into())
        }
    }
}
