//! Challenge token construction and signing.
//! Used by: lib, main.

pub mod claims;
pub mod header;
pub mod request;
pub mod sign;

pub use claims::{Payload, VALIDITY_SECONDS};
pub use header::{Header, TokenPurpose};
pub use request::ChallengeRequest;
pub use sign::{sign_token, signing_input};
