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
//! Shared wire DTOs and the session/redirect contract for the Mercato client.
//!
//! These types are re-used by the edge interception layer and the web UI so
//! the cookie layout, the validation payload, and the login redirect contract
//! stay a single source of truth.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie readable by the edge interception layer.
pub const SESSION_COOKIE: &str = "token";

/// Key of the private durable store entry holding the same bearer value.
pub const SESSION_STORAGE_KEY: &str = "token";

/// Lifetime of the session cookie, matched to the credential's validity window.
pub const SESSION_COOKIE_MAX_AGE_SECS: u32 = 86_400;

/// Path of the authentication entry point the guard redirects to.
pub const LOGIN_PATH: &str = "/login";

/// Path prefix of the admin namespace enforced by the guard.
pub const ADMIN_PREFIX: &str = "/admin";

/// Remote endpoint consulted for every protected-route request.
pub const VALIDATE_ADMIN_PATH: &str = "/api/auth/validate-admin";

/// Server-push endpoint feeding the admin notification channel.
pub const NOTIFICATION_STREAM_PATH: &str = "/api/notifications/stream";

/// Query parameter carrying the path to return to after authentication.
pub const QUERY_REDIRECT: &str = "redirect";

/// Query parameter carrying the machine-readable denial reason.
pub const QUERY_ERROR: &str = "error";

/// Body returned by the admin validation endpoint.
///
/// The flag is authoritative only when it comes from the remote check; a 2xx
/// status alone never grants access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminValidation {
    /// Whether the presented credential belongs to an admin identity.
    pub is_admin: bool,
}

/// Denial reasons carried on the login redirect as the `error` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardReason {
    /// The credential was missing, invalid, or expired (401).
    Unauthorized,
    /// The credential was valid but lacked admin privilege (403).
    Forbidden,
    /// The validation endpoint answered with an unexpected status.
    ValidationFailed,
    /// The validation call itself failed (transport or malformed response).
    ServerError,
}

impl GuardReason {
    /// Wire value used in the redirect query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::ValidationFailed => "validation_failed",
            Self::ServerError => "server_error",
        }
    }

    /// Parse a wire value back into a reason.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unauthorized" => Some(Self::Unauthorized),
            "forbidden" => Some(Self::Forbidden),
            "validation_failed" => Some(Self::ValidationFailed),
            "server_error" => Some(Self::ServerError),
            _ => None,
        }
    }
}

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Successful login response carrying the bearer credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token, fixed lifetime, never rotated.
    pub token: String,
}

/// Order row rendered by the admin console list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOrder {
    /// Order identifier.
    pub id: Uuid,
    /// Customer display name.
    pub customer: String,
    /// Current fulfilment status label.
    pub status: String,
    /// Order total in minor currency units.
    pub total_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::{AdminValidation, GuardReason};

    #[test]
    fn guard_reason_round_trips_through_wire_values() {
        for reason in [
            GuardReason::Unauthorized,
            GuardReason::Forbidden,
            GuardReason::ValidationFailed,
            GuardReason::ServerError,
        ] {
            assert_eq!(GuardReason::parse(reason.as_str()), Some(reason));
        }
        assert_eq!(GuardReason::parse("nope"), None);
    }

    #[test]
    fn admin_validation_uses_camel_case_flag() {
        let parsed: AdminValidation = serde_json::from_str(r#"{"isAdmin":true}"#)
            .expect("valid validation body");
        assert!(parsed.is_admin);
        let encoded = serde_json::to_string(&AdminValidation { is_admin: false })
            .expect("serializable");
        assert_eq!(encoded, r#"{"isAdmin":false}"#);
    }
}
