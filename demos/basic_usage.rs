//! Checks service health, then looks up a well-known address.
//!
//! ```text
//! IPDRIFT_API_KEY=your-key RUST_LOG=ipdrift=debug cargo run --example basic_usage
//! ```

use ipdrift::{IpDriftClient, IpDriftConfig, IpDriftError, LookupOptions};
use tracing_subscriber::EnvFilter;

fn report(error: &IpDriftError) {
    eprintln!("Error: {}", error.message());
    if let Some(status) = error.status() {
        eprintln!("Status: {status}");
    }
    if let Some(detail) = error.detail() {
        eprintln!("Detail: {detail}");
    }
    if let Some(rate_limit) = error.rate_limit() {
        eprintln!(
            "Rate limit: {}/{} remaining, resets at {:?}",
            rate_limit.remaining,
            rate_limit.limit,
            rate_limit.reset_at()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("IPDRIFT_API_KEY").unwrap_or_default();
    let client = IpDriftClient::new(IpDriftConfig::new(api_key)?)?;

    match client.health().await {
        Ok(health) => println!("Service healthy: {}", health.ok),
        Err(error) => report(&error),
    }

    match client.lookup(LookupOptions::for_ip("8.8.8.8")).await {
        Ok(result) => {
            println!("IP: {}", result.ip);
            println!(
                "Location: {}, {}, {}",
                result.city.as_deref().unwrap_or("?"),
                result.region_name.as_deref().unwrap_or("?"),
                result.country_name.as_deref().unwrap_or("?")
            );
            if let (Some(lat), Some(lon)) = (result.latitude, result.longitude) {
                println!("Coordinates: {lat}, {lon}");
            }
            if let Some(connection) = &result.connection {
                println!("ISP: {}", connection.isp.as_deref().unwrap_or("?"));
            }
            if let Some(time_zone) = &result.time_zone {
                println!("Time zone: {}", time_zone.id.as_deref().unwrap_or("?"));
            }
            if let Some(security) = &result.security {
                println!(
                    "Proxy: {:?}, Tor: {:?}, Threat: {:?}",
                    security.is_proxy, security.is_tor, security.threat_level
                );
            }
        }
        Err(error) => report(&error),
    }

    Ok(())
}
