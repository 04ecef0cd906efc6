#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Mercato edge: serves the compiled storefront bundle and intercepts every
//! request under the admin namespace before any page is rendered.
//!
//! Layout: `bootstrap.rs` (service wiring), `config.rs` (environment config),
//! `http/` (router, admin guard, upstream validator), `telemetry.rs`
//! (tracing subscriber setup).

/// Application bootstrap and environment loading.
pub mod bootstrap;
/// Environment-driven edge configuration.
pub mod config;
/// Edge-level error type.
pub mod error;
/// HTTP router, admin guard, and upstream validator.
pub mod http;
/// Logging initialisation.
pub mod telemetry;

pub use bootstrap::run_edge;
pub use error::{EdgeError, EdgeResult};
pub use http::router::{EdgeState, edge_router};
pub use http::validator::{AdminValidator, HttpAdminValidator, Verdict};
