/*
[INPUT]:  Wall-clock time at dispatch
[OUTPUT]: Per-request nonce (fractional seconds since epoch)
[POS]:    Auth layer - nonce generation for private requests
[UPDATE]: When changing nonce resolution or encoding
*/

use std::fmt;

use chrono::{DateTime, Utc};

/// Nonce sent with every private request.
///
/// Derived from the wall clock with microsecond resolution and no stored
/// counter. The exchange rejects non-increasing nonces per credential, so two
/// requests sharing a credential must be dispatched one after the other, and a
/// clock step backwards will make the next request fail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Nonce(f64);

impl Nonce {
    /// Nonce for a request dispatched now
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        let secs = at.timestamp() as f64;
        let micros = f64::from(at.timestamp_subsec_micros());
        Self(secs + micros / 1_000_000.0)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
