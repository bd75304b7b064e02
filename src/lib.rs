//! # IPDrift Rust client
//!
//! An async client for the [IPDrift](https://geo.ipdrift.com) IP geolocation
//! API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`IpDriftConfig`] and [`IpDriftConfigBuilder`]
//! - A validated [`ApiKey`] whose debug output is masked
//! - [`IpDriftClient`] with two operations: [`lookup`](IpDriftClient::lookup)
//!   and [`health`](IpDriftClient::health)
//! - A single error type, [`IpDriftError`], for every failure after construction
//! - Rate limit snapshots ([`RateLimitInfo`]) parsed from error responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipdrift::{IpDriftClient, IpDriftConfig, LookupOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IpDriftClient::new(IpDriftConfig::new("your-api-key")?)?;
//!
//! let result = client.lookup(LookupOptions::for_ip("8.8.8.8")).await?;
//! println!("{} is in {:?}", result.ip, result.country_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use ipdrift::IpDriftClient;
//!
//! # async fn run(client: IpDriftClient) {
//! match client.lookup_ip("8.8.8.8").await {
//!     Ok(result) => println!("{:?}", result.city),
//!     Err(error) => {
//!         eprintln!("Error: {error}");
//!         if let Some(status) = error.status() {
//!             eprintln!("Status: {status}");
//!         }
//!         if let Some(rate_limit) = error.rate_limit() {
//!             eprintln!("Retry after {:?}", rate_limit.reset_at());
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: each client owns its configuration and transport
//! - **Fail-fast validation**: configuration is validated on construction
//! - **One error type**: transport failures are normalized exactly once
//! - **Thread-safe**: all types are `Send + Sync`
//! - **No retries**: one call, one request

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod types;

pub use client::IpDriftClient;
pub use clients::RateLimitInfo;
pub use config::{
    ApiKey, BaseUrl, IpDriftConfig, IpDriftConfigBuilder, PublicConfig, DEFAULT_BASE_URL,
    DEFAULT_RETRIES, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use error::{ConfigError, IpDriftError};
pub use types::{
    Connection, Currency, ErrorResponse, HealthResponse, IpLookupResponse, IpType, Language,
    Location, LookupOptions, Security, ThreatLevel, TimeZone,
};
