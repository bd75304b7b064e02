//! Configuration types for the IPDrift client.
//!
//! # Overview
//!
//! - [`IpDriftConfig`]: the immutable client configuration
//! - [`IpDriftConfigBuilder`]: a builder for constructing [`IpDriftConfig`] instances
//! - [`PublicConfig`]: the configuration without the API key, safe to log
//! - [`ApiKey`]: a validated API key newtype with masked debug output
//! - [`BaseUrl`]: a validated service base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use ipdrift::{ApiKey, IpDriftConfig};
//!
//! let config = IpDriftConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://geo.ipdrift.com");
//! assert_eq!(config.retries(), 3);
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Base URL of the hosted IPDrift service.
pub const DEFAULT_BASE_URL: &str = "https://geo.ipdrift.com";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default `retries` value. Accepted and reported, not acted on.
pub const DEFAULT_RETRIES: u32 = 3;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "ipdrift-client-js/1.0.0";

/// Configuration for the IPDrift client.
///
/// The `Debug` output never contains the API key.
///
/// # Example
///
/// ```rust
/// use ipdrift::IpDriftConfig;
///
/// let config = IpDriftConfig::new("your-api-key").unwrap();
/// assert_eq!(config.api_key().as_ref(), "your-api-key");
/// assert!(!format!("{:?}", config).contains("your-api-key"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpDriftConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    retries: u32,
    user_agent: String,
}

impl IpDriftConfig {
    /// Creates a configuration with defaults for everything but the key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(ApiKey::new(api_key)?).build()
    }

    /// Creates a new builder for constructing an `IpDriftConfig`.
    #[must_use]
    pub fn builder() -> IpDriftConfigBuilder {
        IpDriftConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured retry count.
    ///
    /// The client does not retry failed requests; this value is carried for
    /// callers that implement their own policy.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns a copy of the configuration without the API key.
    #[must_use]
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            retries: self.retries,
        }
    }
}

// Verify IpDriftConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IpDriftConfig>();
};

/// The client configuration with the API key removed.
///
/// Returned by [`IpDriftClient::public_config`](crate::IpDriftClient::public_config)
/// so that configuration can be logged or displayed without exposing the
/// credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicConfig {
    /// The service base URL.
    pub base_url: BaseUrl,
    /// The per-request timeout.
    pub timeout: Duration,
    /// The configured retry count.
    pub retries: u32,
}

/// Builder for constructing [`IpDriftConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `retries`: [`DEFAULT_RETRIES`]
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ipdrift::{ApiKey, BaseUrl, IpDriftConfig};
///
/// let config = IpDriftConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .timeout(Duration::from_millis(2_500))
///     .retries(0)
///     .user_agent("my-app/2.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent(), "my-app/2.0");
/// ```
#[derive(Debug, Default)]
pub struct IpDriftConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    retries: Option<u32>,
    user_agent: Option<String>,
}

impl IpDriftConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the service base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry count.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`IpDriftConfig`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if no API key was set, or
    /// [`ConfigError::InvalidTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<IpDriftConfig, ConfigError> {
        let api_key = self.api_key.ok_or(ConfigError::EmptyApiKey)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(IpDriftConfig {
            api_key,
            base_url,
            timeout,
            retries: self.retries.unwrap_or(DEFAULT_RETRIES),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}
