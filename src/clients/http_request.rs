//! HTTP request types for the IPDrift client.
//!
//! This module provides the [`HttpRequest`] type and its builder. Both
//! IPDrift endpoints are read-only, so every request is a GET.

use std::collections::BTreeMap;

use crate::clients::errors::InvalidHttpRequestError;

/// A GET request to be sent to the IPDrift API.
///
/// Query parameters are kept in a sorted map so identical requests always
/// produce identical query strings.
///
/// # Example
///
/// ```rust
/// use ipdrift::clients::HttpRequest;
///
/// let request = HttpRequest::builder("/v1/lookup")
///     .query_param("ip", "8.8.8.8")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/v1/lookup");
/// assert_eq!(request.query.get("ip").map(String::as_str), Some("8.8.8.8"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for the given path.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyPath`] if the path is empty
    /// or consists only of slashes.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: BTreeMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Merges a set of query parameters into the request.
    ///
    /// Existing keys are overwritten by the incoming values.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query.extend(query);
        self
    }

    /// Adds a single query parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
