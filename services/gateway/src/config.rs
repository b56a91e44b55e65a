//! Environment-derived gateway configuration
//!
//! Everything has a development-friendly default so the service starts with
//! no environment at all. Upstream diagnostics appear in failure responses
//! only when `APP_ENV` is `development` (the default); any other value
//! withholds them.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the upstream store exposing the available-listings
    /// procedure and the profiles table.
    pub upstream_url: String,
    /// Service-role key sent to the upstream store, when one is configured.
    pub service_key: Option<String>,
    /// Whether failure responses carry the upstream diagnostic. Only true in
    /// development.
    pub expose_upstream_errors: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_kv(&std::env::vars().collect())
    }

    pub fn from_kv(kv: &HashMap<String, String>) -> Result<Self, anyhow::Error> {
        let bind_addr = match kv.get("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid BIND_ADDR: {raw}"))?,
            None => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080),
        };

        let upstream_url = kv
            .get("UPSTREAM_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string();

        let service_key = kv
            .get("UPSTREAM_SERVICE_KEY")
            .cloned()
            .filter(|k| !k.is_empty());

        let app_env = kv.get("APP_ENV").map(String::as_str).unwrap_or("development");

        Ok(Self {
            bind_addr,
            upstream_url,
            service_key,
            expose_upstream_errors: app_env == "development",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_kv(&HashMap::new()).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.upstream_url, "http://localhost:8081");
        assert_eq!(config.service_key, None);
        assert!(config.expose_upstream_errors);
    }

    #[test]
    fn test_diagnostics_exposed_in_development_only() {
        for (env, exposed) in [
            ("development", true),
            ("production", false),
            ("staging", false),
        ] {
            let kv = HashMap::from([("APP_ENV".to_string(), env.to_string())]);
            let config = GatewayConfig::from_kv(&kv).unwrap();
            assert_eq!(config.expose_upstream_errors, exposed, "APP_ENV={env}");
        }
    }

    #[test]
    fn test_trailing_slash_stripped_from_upstream_url() {
        let kv = HashMap::from([(
            "UPSTREAM_URL".to_string(),
            "https://db.example.com/".to_string(),
        )]);
        let config = GatewayConfig::from_kv(&kv).unwrap();
        assert_eq!(config.upstream_url, "https://db.example.com");
    }

    #[test]
    fn test_invalid_bind_addr_rejected() {
        let kv = HashMap::from([("BIND_ADDR".to_string(), "not-an-addr".to_string())]);
        assert!(GatewayConfig::from_kv(&kv).is_err());
    }
}
