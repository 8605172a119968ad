/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Zaif adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiKeyPair, AuthMode, CredentialStore, Nonce};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoolDown,
    FixedCoolDown,
    NoCoolDown,
    PrivateApi,
    Result,
    ZaifClient,
    ZaifError,
};

// Re-export all types
pub use types::*;
