//! Session cookie layout and login entry-point messaging.
//!
//! # Design
//! - The cookie string format is pure so the layout is testable without a
//!   browser; the wasm store writes exactly these strings.
//! - Cookie deletion is an expired rewrite: the cookie API exposes no
//!   dedicated removal primitive.

use mercato_api_models::{GuardReason, SESSION_COOKIE, SESSION_COOKIE_MAX_AGE_SECS};

/// Cookie string persisting a credential for the interception layer.
///
/// `samesite=lax` keeps the cookie readable on same-origin navigations while
/// withholding it from cross-site subrequests.
#[must_use]
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; path=/; max-age={SESSION_COOKIE_MAX_AGE_SECS}; samesite=lax")
}

/// Cookie string invalidating the credential immediately.
#[must_use]
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; path=/; max-age=0; samesite=lax")
}

/// Read a named value out of a `document.cookie`-shaped string.
///
/// Empty values count as absent: an expired rewrite leaves no live value.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let (pair_name, value) = pair.split_once('=')?;
            (pair_name.trim() == name && !value.trim().is_empty())
                .then(|| value.trim().to_string())
        })
        .next()
}

/// Entry-point copy for each denial reason carried on the redirect.
#[must_use]
pub const fn guard_reason_message(reason: GuardReason) -> &'static str {
    match reason {
        GuardReason::Unauthorized => "Please sign in to continue.",
        GuardReason::Forbidden => "This account does not have admin access.",
        GuardReason::ValidationFailed => {
            "Your session could not be verified. Please sign in again."
        }
        GuardReason::ServerError => {
            "Something went wrong while checking your session. Please try again."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{cookie_value, expired_session_cookie, guard_reason_message, session_cookie};
    use mercato_api_models::{GuardReason, SESSION_COOKIE};

    #[test]
    fn session_cookie_carries_the_required_attributes() {
        let cookie = session_cookie("tok-123");
        assert!(cookie.starts_with("token=tok-123"));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("max-age=86400"));
        assert!(cookie.contains("samesite=lax"));
    }

    #[test]
    fn set_then_read_returns_the_token() {
        let jar = session_cookie("tok-123");
        assert_eq!(cookie_value(&jar, SESSION_COOKIE).as_deref(), Some("tok-123"));
    }

    #[test]
    fn expired_rewrite_leaves_no_live_value() {
        let jar = expired_session_cookie();
        assert!(jar.contains("max-age=0"));
        assert_eq!(cookie_value(&jar, SESSION_COOKIE), None);
    }

    #[test]
    fn cookie_value_scans_multi_pair_jars() {
        let jar = "locale=fr; token=tok-123; theme=dark";
        assert_eq!(cookie_value(jar, "token").as_deref(), Some("tok-123"));
        assert_eq!(cookie_value(jar, "missing"), None);
    }

    #[test]
    fn every_reason_has_entry_point_copy() {
        for reason in [
            GuardReason::Unauthorized,
            GuardReason::Forbidden,
            GuardReason::ValidationFailed,
            GuardReason::ServerError,
        ] {
            assert!(!guard_reason_message(reason).is_empty());
        }
    }
}
