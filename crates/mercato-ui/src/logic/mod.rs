//! DOM-free core logic for the web client.
//!
//! Everything in this tree runs on the host as well as in the browser, so the
//! session rules, the gateway's error shaping, the push-stream parser, and
//! the notification dispatch policy are all unit-tested natively.

/// Request gateway planning and error shaping.
pub mod gateway;
/// Notification dispatch policy and stream URL construction.
pub mod notify;
/// Session cookie layout and entry-point messaging.
pub mod session;
/// Incremental parser for the server-push event stream.
pub mod sse;
