//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated IPDrift API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output so it cannot leak through logs.
///
/// # Example
///
/// ```rust
/// use ipdrift::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the IPDrift service.
///
/// The URL must be absolute and use the `http` or `https` scheme. A trailing
/// slash is stripped so that endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use ipdrift::BaseUrl;
///
/// let url = BaseUrl::new("https://geo.ipdrift.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://geo.ipdrift.com");
///
/// assert!(BaseUrl::new("geo.ipdrift.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// has no host, or does not use `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let parsed = Url::parse(&trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid());
        }

        Ok(Self(trimmed))
    }

    /// Joins an endpoint path onto this base URL.
    ///
    /// ```rust
    /// use ipdrift::BaseUrl;
    ///
    /// let url = BaseUrl::new("https://geo.ipdrift.com").unwrap();
    /// assert_eq!(url.join("/v1/lookup"), "https://geo.ipdrift.com/v1/lookup");
    /// assert_eq!(url.join("health"), "https://geo.ipdrift.com/health");
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://geo.ipdrift.com///").unwrap();
        assert_eq!(url.as_ref(), "https://geo.ipdrift.com");
    }

    #[test]
    fn test_base_url_accepts_port_and_path_prefix() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.join("/health"), "http://127.0.0.1:8080/health");

        let url = BaseUrl::new("https://proxy.example.com/ipdrift").unwrap();
        assert_eq!(
            url.join("/v1/lookup"),
            "https://proxy.example.com/ipdrift/v1/lookup"
        );
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("geo.ipdrift.com").is_err());

        // Empty
        assert!(BaseUrl::new("").is_err());

        // Unsupported scheme
        assert!(BaseUrl::new("ftp://geo.ipdrift.com").is_err());

        // Query strings are not allowed in the base
        assert!(BaseUrl::new("https://geo.ipdrift.com?api_key=x").is_err());
    }

    #[test]
    fn test_base_url_error_keeps_original_input() {
        let result = BaseUrl::new("not a url");
        assert_eq!(
            result,
            Err(ConfigError::InvalidBaseUrl {
                url: "not a url".to_string()
            })
        );
    }

    #[test]
    fn test_base_url_round_trip_serialization() {
        let original = BaseUrl::new("https://geo.ipdrift.com").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""https://geo.ipdrift.com""#);
        let restored: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
