//! Request options and response payloads of the IPDrift API.
//!
//! The response types are plain `serde` records. The client decodes bodies
//! into them and hands them to the caller without interpreting the values.

mod lookup;

use serde::{Deserialize, Serialize};

pub use lookup::{
    Connection, Currency, IpLookupResponse, IpType, Language, Location, LookupOptions, Security,
    ThreatLevel, TimeZone,
};

/// Payload of `GET /health`.
///
/// ```rust
/// use ipdrift::HealthResponse;
///
/// let health: HealthResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
/// assert!(health.ok);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the service is operational.
    pub ok: bool,
}

/// Body the service sends with error statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Explanation of the failure.
    pub detail: String,
}
