//! Request gateway: the single chokepoint for outbound API calls.
//!
//! # Design
//! - Every call flows through [`ApiClient::request`]; typed helpers are thin
//!   wrappers over it.
//! - The session store is injected at construction and read at request time,
//!   so the gateway never holds a stale credential copy.
//! - Failures of any kind surface as the uniform `ApiError` value.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use mercato_api_models::{AdminOrder, LoginRequest, LoginResponse};

use crate::core::session::SessionStore;
use crate::logic::gateway::{
    ApiError, HttpMethod, ParseMode, bearer_value, is_json_content_type, resolve_url,
};

/// Request body accepted by the gateway.
pub enum RequestBody {
    /// JSON-encoded payload.
    Json(Value),
    /// Raw text payload.
    Text(String),
    /// Opaque multipart form; the browser supplies the content type.
    Form(web_sys::FormData),
}

/// Per-call options for [`ApiClient::request`].
pub struct RequestOptions {
    /// HTTP method.
    pub method: HttpMethod,
    /// Whether to attach the bearer credential.
    pub auth: bool,
    /// Success-body interpretation.
    pub parse: ParseMode,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            auth: true,
            parse: ParseMode::Json,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Decoded success payload.
pub enum ApiPayload {
    /// No value (204, `ParseMode::None`, or a non-JSON body under JSON mode).
    Empty,
    /// Raw text body.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Decoded JSON document.
    Json(Value),
}

/// Stateless HTTP client bound to one base origin and one session store.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client over the given base origin and session store.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    /// Issue a request and normalize the outcome.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any non-success response or transport
    /// failure; callers never branch on which of the two happened.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiPayload, ApiError> {
        let url = resolve_url(&self.base_url, path);
        let mut req = match options.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let mut has_content_type = false;
        for (name, value) in &options.headers {
            if name.eq_ignore_ascii_case("content-type") {
                has_content_type = true;
            }
            req = req.header(name, value);
        }
        req = req.header("accept", "application/json");

        if options.auth {
            if let Some(token) = self.session.get() {
                req = req.header("authorization", &bearer_value(&token));
            }
        }

        let sent = match options.body {
            None => req.send().await,
            Some(RequestBody::Json(value)) => {
                if has_content_type {
                    req.body(value.to_string()).send().await
                } else {
                    match req.json(&value) {
                        Ok(req) => req.send().await,
                        Err(error) => return Err(ApiError::transport(error.to_string())),
                    }
                }
            }
            Some(RequestBody::Text(text)) => {
                if !has_content_type {
                    req = req.header("content-type", "text/plain;charset=UTF-8");
                }
                req.body(text).send().await
            }
            Some(RequestBody::Form(form)) => req.body(form).send().await,
        };

        let response = sent.map_err(|error| ApiError::transport(error.to_string()))?;
        Self::decode(response, options.parse).await
    }

    async fn decode(response: Response, parse: ParseMode) -> Result<ApiPayload, ApiError> {
        let status = response.status();
        let content_type = response.headers().get("content-type");

        if !(200..300).contains(&status) {
            let raw = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, content_type.as_deref(), &raw));
        }

        if status == 204 || matches!(parse, ParseMode::None) {
            return Ok(ApiPayload::Empty);
        }

        match parse {
            ParseMode::None => Ok(ApiPayload::Empty),
            ParseMode::Text => {
                let text = response
                    .text()
                    .await
                    .map_err(|error| ApiError::transport(error.to_string()))?;
                Ok(ApiPayload::Text(text))
            }
            ParseMode::Binary => {
                let bytes = response
                    .binary()
                    .await
                    .map_err(|error| ApiError::transport(error.to_string()))?;
                Ok(ApiPayload::Bytes(bytes))
            }
            ParseMode::Json => {
                if !is_json_content_type(content_type.as_deref()) {
                    return Ok(ApiPayload::Empty);
                }
                let text = response
                    .text()
                    .await
                    .map_err(|error| ApiError::transport(error.to_string()))?;
                if text.is_empty() {
                    return Ok(ApiPayload::Empty);
                }
                serde_json::from_str(&text)
                    .map(ApiPayload::Json)
                    .map_err(|error| ApiError {
                        status,
                        message: format!("invalid JSON response: {error}"),
                        payload: None,
                    })
            }
        }
    }

    fn expect_json<T: DeserializeOwned>(payload: ApiPayload) -> Result<T, ApiError> {
        match payload {
            ApiPayload::Json(value) => serde_json::from_value(value)
                .map_err(|error| ApiError::transport(format!("unexpected response shape: {error}"))),
            _ => Err(ApiError::transport("expected a JSON response body")),
        }
    }

    /// GET a JSON document and decode it into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request failure or shape mismatch.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: bool,
    ) -> Result<T, ApiError> {
        let payload = self
            .request(
                path,
                RequestOptions {
                    auth,
                    ..RequestOptions::default()
                },
            )
            .await?;
        Self::expect_json(payload)
    }

    /// POST a JSON body and decode the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request failure or shape mismatch.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        auth: bool,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|error| ApiError::transport(format!("unencodable request body: {error}")))?;
        let payload = self
            .request(
                path,
                RequestOptions {
                    method: HttpMethod::Post,
                    auth,
                    body: Some(RequestBody::Json(value)),
                    ..RequestOptions::default()
                },
            )
            .await?;
        Self::expect_json(payload)
    }

    /// Authenticate with the storefront API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the credentials are rejected or the call
    /// fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/api/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
            false,
        )
        .await
    }

    /// Fetch the admin order list.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the list cannot be loaded.
    pub async fn fetch_admin_orders(&self) -> Result<Vec<AdminOrder>, ApiError> {
        self.get_json("/api/admin/orders", true).await
    }
}
