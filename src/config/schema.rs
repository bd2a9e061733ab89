//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site
//! server. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Placeholder admin key shipped in the defaults. Startup warns when the
/// admin console runs with it.
pub const PLACEHOLDER_API_KEY: &str = "CHANGE_ME_IN_PRODUCTION";

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, request deadline).
    pub server: ServerConfig,

    /// Site content locations (templates, static assets).
    pub content: ContentConfig,

    /// Admin console settings.
    pub admin: AdminConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Site content locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory the templating engine resolves page templates from.
    pub templates_dir: String,

    /// Directory served under the static-asset mount.
    pub static_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Admin console configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Mount the admin console at its fixed prefix.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,
}

impl AdminConfig {
    /// True when the configured key is still the shipped placeholder.
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // WARNING: This is a placeholder! Change this in production.
            api_key: PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Attach standard security response headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_admin_key_is_the_placeholder() {
        let config = SiteConfig::default();
        assert_eq!(config.admin.api_key, PLACEHOLDER_API_KEY);
        assert!(config.admin.has_placeholder_key());
    }

    #[test]
    fn replaced_key_is_not_the_placeholder() {
        let mut config = SiteConfig::default();
        config.admin.api_key = "a-real-key".to_string();
        assert!(!config.admin.has_placeholder_key());
    }
}
