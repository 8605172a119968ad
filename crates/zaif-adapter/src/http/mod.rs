/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and classified API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod config;
pub mod cool_down;
pub mod error;
pub mod leverage;
pub mod public;
pub mod response;
pub mod tls;
pub mod trade;
mod transport;

pub use error::{Result, ZaifError};

pub use client::{PrivateApi, ZaifClient};
pub use config::ClientConfig;
pub use cool_down::{CoolDown, FixedCoolDown, NoCoolDown};
pub use response::{RawResponse, classify_private, classify_public};
