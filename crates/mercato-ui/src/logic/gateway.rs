//! Gateway planning helpers and the uniform API error value.
//!
//! # Design
//! - Callers never branch on transport vs. application failure: both surface
//!   as [`ApiError`] with a `status` field; transport failures use status 0.
//! - Error message priority on a failed response: non-empty string payload,
//!   then a `message` field of an object payload, then a generic fallback.
//! - Keep this module DOM-free so the shaping rules run in host tests.

use serde_json::Value;

/// Sentinel status recorded when no response was obtained at all.
pub const TRANSPORT_STATUS: u16 = 0;

/// How a successful response body should be interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Decode JSON when the response declares a JSON content type.
    #[default]
    Json,
    /// Return the raw text body.
    Text,
    /// Discard the body entirely.
    None,
    /// Return the raw bytes.
    Binary,
}

/// HTTP methods exposed by the gateway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    #[default]
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
}

/// Uniform error value produced for any failed gateway call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, or [`TRANSPORT_STATUS`] when no response arrived.
    pub status: u16,
    /// Best-effort human-readable description.
    pub message: String,
    /// Unserialized response body, when one could be extracted.
    pub payload: Option<Value>,
}

impl ApiError {
    /// Error for a failure that produced no response at all.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: TRANSPORT_STATUS,
            message: message.into(),
            payload: None,
        }
    }

    /// Shape a non-success response into an error value.
    ///
    /// The payload is the JSON body when the content type says so (dropped on
    /// parse failure), otherwise the raw text.
    #[must_use]
    pub fn from_response(status: u16, content_type: Option<&str>, raw_body: &str) -> Self {
        let payload = if raw_body.is_empty() {
            None
        } else if is_json_content_type(content_type) {
            serde_json::from_str::<Value>(raw_body).ok()
        } else {
            Some(Value::String(raw_body.to_string()))
        };
        let message = payload
            .as_ref()
            .and_then(payload_message)
            .unwrap_or_else(|| format!("request failed (HTTP {status})"));
        Self {
            status,
            message,
            payload,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

fn payload_message(payload: &Value) -> Option<String> {
    match payload {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Map well-known statuses to user-facing strings.
///
/// The status mapping takes precedence over the error's own message; the
/// caller-supplied fallback is used when neither applies.
#[must_use]
pub fn describe_error(error: &ApiError, fallback: &str) -> String {
    match error.status {
        401 => "authentication required".to_string(),
        403 => "access denied".to_string(),
        404 => "resource not found".to_string(),
        500 => "server error, retry later".to_string(),
        _ if !error.message.trim().is_empty() => error.message.clone(),
        _ => fallback.to_string(),
    }
}

/// Resolve a request path against the configured base origin.
///
/// Absolute http(s) URLs pass through unchanged.
#[must_use]
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Build the authorization header value for a stored credential.
///
/// The store must never hold a prefixed value, but a stray `Bearer ` prefix
/// is stripped rather than doubled.
#[must_use]
pub fn bearer_value(raw: &str) -> String {
    let token = raw.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    format!("Bearer {token}")
}

/// Whether a content-type header declares a JSON body.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| {
        let mime = value.split(';').next().unwrap_or("").trim();
        mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
    })
}

#[cfg(test)]
mod tests {
    use super::{
        ApiError, TRANSPORT_STATUS, bearer_value, describe_error, is_json_content_type,
        resolve_url,
    };
    use serde_json::json;

    #[test]
    fn absolute_urls_pass_through_unchanged() {
        assert_eq!(
            resolve_url("https://api.mercato.shop", "https://cdn.mercato.shop/img.png"),
            "https://cdn.mercato.shop/img.png"
        );
    }

    #[test]
    fn relative_paths_join_the_base_origin() {
        assert_eq!(
            resolve_url("https://api.mercato.shop/", "/api/orders"),
            "https://api.mercato.shop/api/orders"
        );
        assert_eq!(
            resolve_url("https://api.mercato.shop", "api/orders"),
            "https://api.mercato.shop/api/orders"
        );
    }

    #[test]
    fn bearer_prefix_is_never_doubled() {
        assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
        assert_eq!(bearer_value("Bearer tok-123"), "Bearer tok-123");
        assert_eq!(bearer_value("  tok-123  "), "Bearer tok-123");
    }

    #[test]
    fn json_content_type_detection_handles_parameters() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("application/problem+json")));
        assert!(!is_json_content_type(Some("text/html")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn string_payload_wins_the_message_priority() {
        let error = ApiError::from_response(400, Some("application/json"), r#""quota exceeded""#);
        assert_eq!(error.message, "quota exceeded");
        assert_eq!(error.payload, Some(json!("quota exceeded")));
    }

    #[test]
    fn object_message_field_is_second_priority() {
        let error =
            ApiError::from_response(404, Some("application/json"), r#"{"message":"not found"}"#);
        assert_eq!(error.message, "not found");
    }

    #[test]
    fn generic_message_covers_everything_else() {
        let error = ApiError::from_response(502, Some("application/json"), r#"{"code":17}"#);
        assert_eq!(error.message, "request failed (HTTP 502)");

        let empty = ApiError::from_response(503, None, "");
        assert_eq!(empty.message, "request failed (HTTP 503)");
        assert_eq!(empty.payload, None);
    }

    #[test]
    fn unparseable_json_body_yields_null_payload() {
        let error = ApiError::from_response(500, Some("application/json"), "<html>oops</html>");
        assert_eq!(error.payload, None);
        assert_eq!(error.message, "request failed (HTTP 500)");
    }

    #[test]
    fn non_json_body_is_kept_as_text_payload() {
        let error = ApiError::from_response(429, Some("text/plain"), "slow down");
        assert_eq!(error.payload, Some(json!("slow down")));
        assert_eq!(error.message, "slow down");
    }

    #[test]
    fn transport_errors_use_the_sentinel_status() {
        let error = ApiError::transport("connection refused");
        assert_eq!(error.status, TRANSPORT_STATUS);
        assert_eq!(error.payload, None);
    }

    #[test]
    fn status_mapping_takes_precedence_over_body_message() {
        let error =
            ApiError::from_response(404, Some("application/json"), r#"{"message":"not found"}"#);
        assert_eq!(describe_error(&error, "fallback"), "resource not found");
    }

    #[test]
    fn describe_error_falls_back_through_message_then_default() {
        let error = ApiError::from_response(418, Some("application/json"), r#""short and stout""#);
        assert_eq!(describe_error(&error, "fallback"), "short and stout");

        let blank = ApiError {
            status: 0,
            message: String::new(),
            payload: None,
        };
        assert_eq!(describe_error(&blank, "fallback"), "fallback");
    }

    #[test]
    fn json_round_trips_through_the_gateway_encoding() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Payload {
            order: String,
            quantity: u32,
            notes: Option<String>,
        }
        let outbound = Payload {
            order: "ord-1209".to_string(),
            quantity: 3,
            notes: None,
        };
        // Encode the way the gateway does on the way out, decode the way it
        // does on the way back in.
        let wire = serde_json::to_value(&outbound).and_then(|v| serde_json::to_string(&v));
        let value: serde_json::Value = serde_json::from_str(&wire.expect("encodable")).expect("decodable");
        let inbound: Payload = serde_json::from_value(value).expect("equivalent structure");
        assert_eq!(inbound, outbound);
    }

    #[test]
    fn known_statuses_map_to_fixed_strings() {
        for (status, text) in [
            (401, "authentication required"),
            (403, "access denied"),
            (404, "resource not found"),
            (500, "server error, retry later"),
        ] {
            let error = ApiError::from_response(status, None, "");
            assert_eq!(describe_error(&error, "fallback"), text);
        }
    }
}
