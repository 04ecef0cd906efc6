//! Admin namespace guard middleware.
//!
//! # Design
//! - Runs ahead of rendering for every request under the admin namespace.
//! - Reads the credential from the cookie domain only; the private browser
//!   store is invisible at this layer.
//! - Never surfaces an error page: every failure becomes a redirect to the
//!   authentication entry point carrying the original path and a reason code.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, info};

use mercato_api_models::{GuardReason, LOGIN_PATH, QUERY_ERROR, QUERY_REDIRECT, SESSION_COOKIE};

use crate::http::router::EdgeState;
use crate::http::validator::Verdict;

/// Guard every request below the admin namespace.
///
/// A request with no session cookie never reaches the upstream validation
/// endpoint. The remote check runs on every matched request; there is no
/// session-level memoization, trading latency for freshness against revoked
/// privileges.
pub(crate) async fn require_admin(
    State(state): State<Arc<EdgeState>>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let original_path = req.uri().path().to_string();

    let Some(token) = session_cookie(req.headers()) else {
        debug!(path = %original_path, "admin request without session cookie");
        return login_redirect(&original_path, None);
    };

    match state.validator.validate(&token).await {
        Verdict::Allow => next.run(req).await,
        Verdict::Deny(reason) => {
            info!(path = %original_path, reason = reason.as_str(), "admin access denied");
            login_redirect(&original_path, Some(reason))
        }
    }
}

fn login_redirect(original_path: &str, reason: Option<GuardReason>) -> Response {
    Redirect::temporary(&login_redirect_target(original_path, reason)).into_response()
}

/// Build the entry-point URI for a denied request.
///
/// The original path is carried verbatim; slashes are legal inside a query
/// value and the entry page reads the parameter back as an opaque path.
#[must_use]
pub fn login_redirect_target(original_path: &str, reason: Option<GuardReason>) -> String {
    let mut target = format!("{LOGIN_PATH}?{QUERY_REDIRECT}={original_path}");
    if let Some(reason) = reason {
        target.push('&');
        target.push_str(QUERY_ERROR);
        target.push('=');
        target.push_str(reason.as_str());
    }
    target
}

/// Extract the session cookie value from the request headers.
///
/// Multiple `Cookie` headers and multi-pair headers are both handled; the
/// first non-empty `token` pair wins.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name.trim() == SESSION_COOKIE && !value.trim().is_empty())
                .then(|| value.trim().to_string())
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::{login_redirect_target, session_cookie};
    use axum::http::{HeaderMap, HeaderValue, header};
    use mercato_api_models::GuardReason;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn redirect_target_without_reason_omits_error() {
        assert_eq!(
            login_redirect_target("/admin/orders", None),
            "/login?redirect=/admin/orders"
        );
    }

    #[test]
    fn redirect_target_with_reason_appends_error() {
        assert_eq!(
            login_redirect_target("/admin/orders", Some(GuardReason::Forbidden)),
            "/login?redirect=/admin/orders&error=forbidden"
        );
        assert_eq!(
            login_redirect_target("/admin", Some(GuardReason::ServerError)),
            "/login?redirect=/admin&error=server_error"
        );
    }

    #[test]
    fn session_cookie_is_found_among_other_pairs() {
        let headers = headers_with_cookie("locale=fr; token=tok-123; theme=dark");
        assert_eq!(session_cookie(&headers).as_deref(), Some("tok-123"));
    }

    #[test]
    fn empty_or_missing_cookie_yields_none() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
        let headers = headers_with_cookie("token=");
        assert_eq!(session_cookie(&headers), None);
        let headers = headers_with_cookie("session=tok-123");
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn first_live_token_pair_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("token=first; token=second"));
        assert_eq!(session_cookie(&headers).as_deref(), Some("first"));
    }
}
