//! The IPDrift API client.
//!
//! [`IpDriftClient`] owns its configuration and its transport. Every request
//! it sends is built by [`IpDriftClient::authorized_request`], which merges
//! the API key into the query parameters, and every transport failure is
//! passed through [`normalize`] before it reaches the caller.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::clients::{
    normalize, HttpClient, HttpRequest, InvalidHttpRequestError, Transport,
};
use crate::config::{IpDriftConfig, PublicConfig};
use crate::error::{ConfigError, IpDriftError};
use crate::types::{HealthResponse, IpLookupResponse, LookupOptions};

/// Path of the lookup endpoint.
pub const LOOKUP_PATH: &str = "/v1/lookup";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

const LOOKUP_FAILED: &str = "Failed to lookup IP address";
const HEALTH_FAILED: &str = "Health check failed";

/// Client for the IPDrift IP geolocation API.
///
/// The client holds no per-call state. It is `Send + Sync` when its transport
/// is, and concurrent calls on one instance are independent.
///
/// # Example
///
/// ```rust,no_run
/// use ipdrift::{IpDriftClient, IpDriftConfig, LookupOptions};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IpDriftClient::new(IpDriftConfig::new("your-api-key")?)?;
///
/// // Lookup a specific IP
/// let result = client.lookup(LookupOptions::for_ip("8.8.8.8")).await?;
/// println!("{:?}", result.country_name);
///
/// // Lookup the caller's own IP
/// let me = client.lookup(LookupOptions::default()).await?;
/// println!("{}", me.ip);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IpDriftClient<T = HttpClient> {
    config: IpDriftConfig,
    transport: T,
}

// Verify IpDriftClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IpDriftClient>();
};

impl IpDriftClient<HttpClient> {
    /// Creates a client backed by an [`HttpClient`] bound to the configured
    /// base URL, timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// initialized. Key validation already happened when `config` was built.
    pub fn new(config: IpDriftConfig) -> Result<Self, ConfigError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> IpDriftClient<T> {
    /// Creates a client that sends its requests through `transport`.
    ///
    /// The transport is responsible for the base URL, the timeout and the
    /// default headers; the client still adds the API key to every request
    /// and normalizes every failure.
    #[must_use]
    pub const fn with_transport(config: IpDriftConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Looks up geolocation information for an IP address.
    ///
    /// When `options.ip` is unset or empty, no `ip` parameter is sent and
    /// the service resolves the caller's address.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`IpDriftError`] for HTTP and network
    /// failures. Any other failure (such as an undecodable body) is reported
    /// as "Failed to lookup IP address" with status 500.
    pub async fn lookup(&self, options: LookupOptions) -> Result<IpLookupResponse, IpDriftError> {
        let mut params = BTreeMap::new();
        if let Some(ip) = options.ip.filter(|ip| !ip.is_empty()) {
            params.insert("ip".to_string(), ip);
        }
        self.get_json(LOOKUP_PATH, params, LOOKUP_FAILED).await
    }

    /// Looks up a specific IP address.
    ///
    /// Shorthand for `lookup(LookupOptions::for_ip(ip))`.
    ///
    /// # Errors
    ///
    /// See [`lookup`](Self::lookup).
    pub async fn lookup_ip(&self, ip: impl Into<String>) -> Result<IpLookupResponse, IpDriftError> {
        self.lookup(LookupOptions::for_ip(ip)).await
    }

    /// Checks whether the service is operational.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`IpDriftError`] for HTTP and network
    /// failures, or "Health check failed" with status 500 for anything else.
    pub async fn health(&self) -> Result<HealthResponse, IpDriftError> {
        self.get_json(HEALTH_PATH, BTreeMap::new(), HEALTH_FAILED)
            .await
    }

    /// Returns the configuration without the API key.
    #[must_use]
    pub fn public_config(&self) -> PublicConfig {
        self.config.public()
    }

    /// Returns the transport this client sends requests through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds a request for `path` with `params` plus the API key.
    ///
    /// The configured key always wins over an `api_key` entry in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn authorized_request(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(path)
            .query(params)
            .query_param(API_KEY_PARAM, self.config.api_key().as_ref())
            .build()
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
        failure: &'static str,
    ) -> Result<R, IpDriftError> {
        tracing::debug!(
            path,
            params = ?params.keys().collect::<Vec<_>>(),
            "Sending IPDrift request"
        );

        let request = self
            .authorized_request(path, params)
            .map_err(|e| IpDriftError::wrap(failure, &e))?;

        let response = self.transport.get(request).await.map_err(normalize)?;

        serde_json::from_value(response.body).map_err(|e| {
            tracing::warn!(path, error = %e, "Failed to decode IPDrift response");
            IpDriftError::wrap(failure, &e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, HttpResponseError, TransportError};
    use crate::config::ApiKey;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed outcome.
    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
        outcome: fn() -> Result<HttpResponse, TransportError>,
    }

    impl RecordingTransport {
        fn new(outcome: fn() -> Result<HttpResponse, TransportError>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                outcome,
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            (self.outcome)()
        }
    }

    fn ok(body: Value) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse::new(200, HashMap::new(), body))
    }

    fn lookup_body() -> Result<HttpResponse, TransportError> {
        ok(json!({"ip": "8.8.8.8", "type": "ipv4", "country_code": "US"}))
    }

    fn client_with(
        outcome: fn() -> Result<HttpResponse, TransportError>,
    ) -> IpDriftClient<RecordingTransport> {
        let config = IpDriftConfig::new("test-api-key").unwrap();
        IpDriftClient::with_transport(config, RecordingTransport::new(outcome))
    }

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_lookup_without_ip_sends_only_api_key() {
        let client = client_with(lookup_body);
        client.lookup(LookupOptions::default()).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, LOOKUP_PATH);
        assert_eq!(requests[0].query, query(&[("api_key", "test-api-key")]));
    }

    #[tokio::test]
    async fn test_lookup_with_ip_merges_api_key() {
        let client = client_with(lookup_body);
        client.lookup_ip("8.8.8.8").await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(
            requests[0].query,
            query(&[("api_key", "test-api-key"), ("ip", "8.8.8.8")])
        );
    }

    #[tokio::test]
    async fn test_lookup_with_empty_ip_omits_parameter() {
        let client = client_with(lookup_body);
        client.lookup(LookupOptions::for_ip("")).await.unwrap();

        assert!(!client.transport().requests()[0].query.contains_key("ip"));
    }

    #[tokio::test]
    async fn test_repeated_lookups_send_identical_requests() {
        let client = client_with(lookup_body);
        for _ in 0..3 {
            client.lookup_ip("1.1.1.1").await.unwrap();
        }

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 3);
        assert!(requests.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_health_sends_api_key_only() {
        let client = client_with(|| ok(json!({"ok": true})));
        let health = client.health().await.unwrap();

        assert!(health.ok);
        let requests = client.transport().requests();
        assert_eq!(requests[0].path, HEALTH_PATH);
        assert_eq!(requests[0].query, query(&[("api_key", "test-api-key")]));
    }

    #[test]
    fn test_configured_key_wins_over_caller_param() {
        let client = client_with(lookup_body);
        let request = client
            .authorized_request(LOOKUP_PATH, query(&[("api_key", "spoofed"), ("ip", "9.9.9.9")]))
            .unwrap();

        assert_eq!(request.query.get("api_key"), Some(&"test-api-key".to_string()));
        assert_eq!(request.query.get("ip"), Some(&"9.9.9.9".to_string()));
    }

    #[tokio::test]
    async fn test_transport_errors_are_normalized_once() {
        let client = client_with(|| {
            Err(TransportError::Response(HttpResponseError {
                status: 403,
                headers: HashMap::new(),
                body: json!({"detail": "Plan does not include security data"}),
            }))
        });

        let error = client.lookup_ip("8.8.8.8").await.unwrap_err();
        assert_eq!(error.message(), "Forbidden");
        assert_eq!(error.status(), Some(403));
        assert_eq!(error.detail(), Some("Plan does not include security data"));
    }

    #[tokio::test]
    async fn test_undecodable_lookup_body_is_wrapped() {
        let client = client_with(|| ok(json!({"unexpected": true})));

        let error = client.lookup(LookupOptions::default()).await.unwrap_err();
        assert_eq!(error.message(), "Failed to lookup IP address");
        assert_eq!(error.status(), Some(500));
        assert!(error.detail().is_some_and(|d| d.contains("missing field")));
    }

    #[tokio::test]
    async fn test_undecodable_health_body_is_wrapped() {
        let client = client_with(|| ok(json!("service is up")));

        let error = client.health().await.unwrap_err();
        assert_eq!(error.message(), "Health check failed");
        assert_eq!(error.status(), Some(500));
        assert!(error.detail().is_some());
    }

    #[test]
    fn test_public_config_has_no_api_key() {
        let config = IpDriftConfig::builder()
            .api_key(ApiKey::new("hidden-key").unwrap())
            .retries(7)
            .build()
            .unwrap();
        let client = IpDriftClient::new(config).unwrap();

        let public = client.public_config();
        assert_eq!(public.retries, 7);
        assert!(!format!("{public:?}").contains("hidden-key"));
        assert!(!format!("{client:?}").contains("hidden-key"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IpDriftClient>();
        assert_send_sync::<IpDriftClient<RecordingTransport>>();
    }
}
