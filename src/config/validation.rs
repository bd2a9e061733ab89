//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses
//! - Check the content directories exist
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The bind address is not a valid `host:port` pair.
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    /// The templates directory does not exist.
    #[error("templates directory '{0}' not found")]
    TemplatesDir(String),

    /// The static-asset directory does not exist.
    #[error("static directory '{0}' not found")]
    StaticDir(String),

    /// The request timeout must be non-zero.
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !Path::new(&config.content.templates_dir).is_dir() {
        errors.push(ValidationError::TemplatesDir(
            config.content.templates_dir.clone(),
        ));
    }

    if !Path::new(&config.content.static_dir).is_dir() {
        errors.push(ValidationError::StaticDir(
            config.content.static_dir.clone(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        // Relies on the repo's templates/ and static/ directories.
        let config = SiteConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_bind_address_is_reported() {
        let mut config = SiteConfig::default();
        config.server.bind_address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn all_problems_are_collected() {
        let mut config = SiteConfig::default();
        config.server.bind_address = "nope".to_string();
        config.server.request_timeout_secs = 0;
        config.content.templates_dir = "no-such-dir".to_string();
        config.content.static_dir = "also-missing".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
