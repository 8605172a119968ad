/*
[INPUT]:  Credentials, wall-clock time and request parameters
[OUTPUT]: Active auth mode, nonces and signed request bodies
[POS]:    Auth layer - handles Zaif private API authentication
[UPDATE]: When auth modes or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::{ApiKeyPair, AuthMode, CredentialStore};
pub use nonce::Nonce;
pub use signer::{SignedRequest, hmac_sha512_hex, sign_request};
