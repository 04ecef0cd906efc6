//! Edge bootstrap wiring.
//!
//! # Design
//! - Construct every dependency from the environment, then serve until
//!   shutdown; dependency construction is separated for testability.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::EdgeConfig;
use crate::error::{EdgeError, EdgeResult};
use crate::http::router::{EdgeState, edge_router};
use crate::http::validator::HttpAdminValidator;
use crate::telemetry::init_logging;

/// Boot the edge server and block until shutdown.
///
/// # Errors
///
/// Returns an error if configuration, telemetry, or the listener fail.
pub async fn run_edge() -> EdgeResult<()> {
    init_logging()?;
    let config = EdgeConfig::from_env()?;
    run_edge_with(config).await
}

/// Boot sequence that relies entirely on an injected configuration.
pub(crate) async fn run_edge_with(config: EdgeConfig) -> EdgeResult<()> {
    info!(
        listen = %config.listen,
        api_base = %config.api_base,
        assets = %config.asset_dir.display(),
        "mercato edge starting"
    );

    let validator = HttpAdminValidator::new(&config.api_base, config.validate_timeout)?;
    let state = Arc::new(EdgeState::new(Arc::new(validator)));
    let router = edge_router(state, &config.asset_dir);

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| EdgeError::serve("bind", source))?;
    info!(listen = %config.listen, "mercato edge listening");

    axum::serve(listener, router)
        .await
        .map_err(|source| EdgeError::serve("serve", source))
}
