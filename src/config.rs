//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Fixed routing prefix for backend API requests
pub const API_PREFIX: &str = "/chatbi/api";

/// Fixed routing prefix for the backend's open API surface
pub const OPENAPI_PREFIX: &str = "/chatbi/openapi";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Development proxy configuration
    pub proxy: ProxyConfig,
    /// API gateway client configuration
    pub gateway: GatewayConfig,
}

/// Development proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Port the proxy listens on
    pub port: u16,
    /// Host address the proxy binds to
    pub host: String,
    /// Backend origin that proxied requests are forwarded to
    pub target: String,
}

/// API gateway client configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL the gateway client issues requests against
    pub base_url: String,
    /// Base URL override for the legacy tool-type listing call
    pub legacy_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            proxy: ProxyConfig {
                port: env::var("PROXY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
                host: env::var("PROXY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                target: env::var("PROXY_TARGET")
                    .unwrap_or_else(|_| "http://localhost:9080".to_string()),
            },
            gateway: GatewayConfig {
                base_url: env::var("CHATBI_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:9080".to_string()),
                legacy_base_url: env::var("CHAT_API_BASE_URL").ok(),
            },
        }
    }

    /// Get the proxy listen address as a string
    pub fn proxy_addr(&self) -> String {
        format!("{}:{}", self.proxy.host, self.proxy.port)
    }
}
