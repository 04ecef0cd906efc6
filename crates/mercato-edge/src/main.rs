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
#![allow(clippy::multiple_crate_versions)]

//! Binary entrypoint that serves the storefront bundle behind the admin guard.

use mercato_edge::{EdgeResult, run_edge};

/// Bootstraps the Mercato edge and blocks until shutdown.
#[tokio::main]
async fn main() -> EdgeResult<()> {
    run_edge().await
}
