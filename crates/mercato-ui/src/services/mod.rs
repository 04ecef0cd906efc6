//! HTTP client services (REST).

/// Request gateway: the single chokepoint for outbound API calls.
pub mod api;
