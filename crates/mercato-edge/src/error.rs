//! # Design
//!
//! - Centralize edge-level errors for bootstrap and serving.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;

use thiserror::Error;

/// Result alias for edge operations.
pub type EdgeResult<T> = Result<T, EdgeError>;

/// Edge-level error type.
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Configuration values were invalid.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Field name that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Value associated with the failure.
        value: String,
    },
    /// Telemetry initialisation failed.
    #[error("telemetry initialisation failed")]
    Telemetry {
        /// Source subscriber error.
        source: tracing_subscriber::util::TryInitError,
    },
    /// The upstream HTTP client could not be constructed.
    #[error("upstream client construction failed")]
    UpstreamClient {
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// Binding or serving the listener failed.
    #[error("edge server io failed")]
    Serve {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
}

impl EdgeError {
    pub(crate) const fn invalid_config(
        field: &'static str,
        reason: &'static str,
        value: String,
    ) -> Self {
        Self::InvalidConfig {
            field,
            reason,
            value,
        }
    }

    pub(crate) const fn serve(operation: &'static str, source: io::Error) -> Self {
        Self::Serve { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeError;

    #[test]
    fn edge_error_helpers_build_variants() {
        let config = EdgeError::invalid_config("listen", "not a socket address", "nope".into());
        assert!(matches!(config, EdgeError::InvalidConfig { .. }));

        let serve = EdgeError::serve("bind", std::io::Error::other("io"));
        assert!(matches!(serve, EdgeError::Serve { .. }));
    }
}
