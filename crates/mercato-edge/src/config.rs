//! Environment-driven configuration for the edge binary.
//!
//! # Design
//! - Every knob has a local-development default; nothing is mandatory.
//! - Validate eagerly at bootstrap so misconfiguration fails before serving.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EdgeError, EdgeResult};

/// Listen address used when `MERCATO_EDGE_LISTEN` is unset.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Upstream API origin used when `MERCATO_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:9000";

/// Asset directory used when `MERCATO_EDGE_ASSETS` is unset.
pub const DEFAULT_ASSET_DIR: &str = "dist";

/// Validation call timeout used when `MERCATO_EDGE_VALIDATE_TIMEOUT_SECS` is unset.
pub const DEFAULT_VALIDATE_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the edge server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Socket address the edge listens on.
    pub listen: SocketAddr,
    /// Origin of the upstream storefront API, without a trailing slash.
    pub api_base: String,
    /// Directory holding the compiled UI bundle.
    pub asset_dir: PathBuf,
    /// Timeout applied to each admin validation call.
    pub validate_timeout: Duration,
}

impl EdgeConfig {
    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a provided value fails validation.
    pub fn from_env() -> EdgeResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> EdgeResult<Self> {
        let listen_raw =
            lookup("MERCATO_EDGE_LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen: SocketAddr = listen_raw.parse().map_err(|_| {
            EdgeError::invalid_config("listen", "not a socket address", listen_raw.clone())
        })?;

        let api_base_raw =
            lookup("MERCATO_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = normalize_api_base(&api_base_raw)?;

        let asset_dir = PathBuf::from(
            lookup("MERCATO_EDGE_ASSETS").unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string()),
        );

        let timeout_raw = lookup("MERCATO_EDGE_VALIDATE_TIMEOUT_SECS");
        let validate_timeout = match timeout_raw {
            None => Duration::from_secs(DEFAULT_VALIDATE_TIMEOUT_SECS),
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    EdgeError::invalid_config(
                        "validate_timeout",
                        "not a whole number of seconds",
                        raw.clone(),
                    )
                })?;
                if secs == 0 {
                    return Err(EdgeError::invalid_config(
                        "validate_timeout",
                        "must be positive",
                        raw,
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            listen,
            api_base,
            asset_dir,
            validate_timeout,
        })
    }
}

/// Normalize and validate an upstream API origin.
///
/// # Errors
///
/// Returns an error unless the value is an absolute http(s) origin.
pub fn normalize_api_base(raw: &str) -> EdgeResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(EdgeError::invalid_config(
            "api_base",
            "must be an absolute http(s) origin",
            raw.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_VALIDATE_TIMEOUT_SECS, EdgeConfig, normalize_api_base};
    use std::time::Duration;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = EdgeConfig::from_lookup(|_| None).expect("defaults are valid");
        assert_eq!(config.listen.port(), 8080);
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.asset_dir.to_str(), Some("dist"));
        assert_eq!(
            config.validate_timeout,
            Duration::from_secs(DEFAULT_VALIDATE_TIMEOUT_SECS)
        );
    }

    #[test]
    fn api_base_loses_trailing_slash() {
        assert_eq!(
            normalize_api_base("https://api.mercato.shop/").expect("valid origin"),
            "https://api.mercato.shop"
        );
    }

    #[test]
    fn api_base_rejects_relative_values() {
        assert!(normalize_api_base("api.mercato.shop").is_err());
    }

    #[test]
    fn bad_listen_address_is_rejected() {
        let result = EdgeConfig::from_lookup(|name| {
            (name == "MERCATO_EDGE_LISTEN").then(|| "not-an-addr".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = EdgeConfig::from_lookup(|name| {
            (name == "MERCATO_EDGE_VALIDATE_TIMEOUT_SECS").then(|| "0".to_string())
        });
        assert!(result.is_err());
    }
}
