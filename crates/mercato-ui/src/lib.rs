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
//! Mercato web UI: storefront shell plus the admin console.
//!
//! The session store, request gateway, and notification channel live here.
//! `logic/` is DOM-free and compiles natively so its rules are tested on the
//! host; the Yew app itself is wasm32-only.

pub mod logic;
pub mod models;

/// Browser-backed state: the credential store and the shared app store.
#[cfg(target_arch = "wasm32")]
pub mod core;
/// HTTP client services (REST + push stream consumption).
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
