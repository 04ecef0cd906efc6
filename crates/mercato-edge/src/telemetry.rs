//! Logging initialisation for the edge binary.
//!
//! # Design
//! - One entry point installing an `EnvFilter`-driven fmt subscriber.
//! - `RUST_LOG` wins; otherwise fall back to a sane default level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{EdgeError, EdgeResult};

/// Default logging target when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info,tower_http=debug";

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if another subscriber has already been installed.
pub fn init_logging() -> EdgeResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|source| EdgeError::Telemetry { source })
}
