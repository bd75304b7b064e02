//! Payload of `GET /v1/lookup`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for [`IpDriftClient::lookup`](crate::IpDriftClient::lookup).
///
/// Leaving `ip` unset (or empty) asks the service to resolve the caller's
/// own address.
///
/// ```rust
/// use ipdrift::LookupOptions;
///
/// assert_eq!(LookupOptions::default().ip, None);
/// assert_eq!(LookupOptions::for_ip("8.8.8.8").ip.as_deref(), Some("8.8.8.8"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// The address to look up.
    pub ip: Option<String>,
}

impl LookupOptions {
    /// Options targeting a specific address.
    #[must_use]
    pub fn for_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
        }
    }
}

/// Address family of the looked-up IP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpType {
    /// IPv4 address.
    Ipv4,
    /// IPv6 address.
    Ipv6,
}

/// Threat level assessed by the service.
///
/// Levels other than `low`, `medium` and `high` are kept verbatim in
/// [`Other`](Self::Other).
///
/// ```rust
/// use ipdrift::ThreatLevel;
///
/// let level: ThreatLevel = serde_json::from_str(r#""high""#).unwrap();
/// assert_eq!(level, ThreatLevel::High);
///
/// let level: ThreatLevel = serde_json::from_str(r#""none""#).unwrap();
/// assert_eq!(level, ThreatLevel::Other("none".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
    /// A level this client does not know.
    #[serde(untagged)]
    Other(String),
}

/// A language spoken in the located country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639 code.
    pub code: String,
    /// English name.
    pub name: String,
    /// Native name.
    pub native: String,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Country-level location details.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_flag_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_flag_emoji_unicode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eu: Option<bool>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time zone of the located address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    /// IANA identifier, e.g. `America/Los_Angeles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Local time at the address, ISO 8601 with offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<String>,
    /// Offset from GMT in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_offset: Option<i64>,
    /// Abbreviation, e.g. `PDT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_daylight_saving: Option<bool>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimeZone {
    /// Parses `current_time`.
    ///
    /// Returns `None` if the field is absent or not valid RFC 3339.
    #[must_use]
    pub fn current_time_parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.current_time
            .as_deref()
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
    }
}

/// Currency used at the located address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_native: Option<String>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Network connection details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Autonomous system number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    /// Second-level domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sld: Option<String>,
    /// Top-level domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<String>,
    /// International Standard Industrial Classification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isic_code: Option<String>,
    /// North American Industry Classification System code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics_code: Option<String>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Proxy, crawler and threat assessment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_crawler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<ThreatLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_last_detected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymizer_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting_facility: Option<bool>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Geolocation record for one IP address.
///
/// Fields the service adds beyond the ones modeled here are kept in the
/// `extra` map of the record or group they appear in. Re-serializing a
/// response reproduces the received body, except that a modeled field sent
/// as `null` reads as `None` and is omitted.
///
/// # Example
///
/// ```rust
/// use ipdrift::{IpLookupResponse, IpType};
/// use serde_json::json;
///
/// let response: IpLookupResponse = serde_json::from_value(json!({
///     "ip": "8.8.8.8",
///     "type": "ipv4",
///     "country_code": "US",
///     "connection": {"asn": 15169, "isp": "GOOGLE"}
/// }))
/// .unwrap();
///
/// assert_eq!(response.ip_type, IpType::Ipv4);
/// assert_eq!(response.country_code.as_deref(), Some("US"));
/// assert_eq!(response.connection.unwrap().asn, Some(15169));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpLookupResponse {
    /// The address that was looked up.
    pub ip: String,
    /// Address family.
    #[serde(rename = "type")]
    pub ip_type: IpType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Metropolitan Statistical Area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msa: Option<String>,
    /// Designated Market Area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dma: Option<String>,
    /// Accuracy radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_routing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
    /// Fields not modeled above, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IpLookupResponse {
    /// Returns `true` for an IPv4 result.
    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        self.ip_type == IpType::Ipv4
    }

    /// Returns `true` for an IPv6 result.
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        self.ip_type == IpType::Ipv6
    }
}
