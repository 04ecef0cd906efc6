//! In-process stub of the upstream storefront API.
//!
//! # Design
//! - Bind an ephemeral port so suites can run in parallel.
//! - Script the validation endpoint per test instead of mutating globals.
//! - Record every hit and the presented bearer token for assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use mercato_api_models::{AdminValidation, VALIDATE_ADMIN_PATH};

/// Scripted behaviour of the stub's admin validation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationScript {
    /// 200 with `{"isAdmin": true}`.
    Admin,
    /// 200 with `{"isAdmin": false}`.
    NotAdmin,
    /// The given status with an empty body.
    Status(u16),
    /// 200 with a body that is not the validation shape.
    MalformedBody,
}

struct StubState {
    script: ValidationScript,
    hits: AtomicUsize,
    last_token: Mutex<Option<String>>,
}

/// Handle to a running stub upstream API.
pub struct StubApi {
    /// Base origin of the stub, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubApi {
    /// Spawn the stub with the given validation script.
    ///
    /// # Errors
    ///
    /// Returns an error if no ephemeral port can be bound.
    pub async fn spawn(script: ValidationScript) -> Result<Self> {
        let state = Arc::new(StubState {
            script,
            hits: AtomicUsize::new(0),
            last_token: Mutex::new(None),
        });

        let router = Router::new()
            .route(VALIDATE_ADMIN_PATH, get(validate_admin))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind stub api listener")?;
        let addr = listener.local_addr().context("stub api local addr")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
        })
    }

    /// Number of validation requests the stub has served.
    #[must_use]
    pub fn validation_hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Bearer token presented on the most recent validation request.
    ///
    /// # Panics
    ///
    /// Panics if the token mutex was poisoned by an earlier test failure.
    #[must_use]
    pub fn last_token(&self) -> Option<String> {
        self.state
            .last_token
            .lock()
            .expect("stub token mutex poisoned")
            .clone()
    }
}

async fn validate_admin(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string);
    if let Ok(mut slot) = state.last_token.lock() {
        *slot = token;
    }

    match state.script {
        ValidationScript::Admin => Json(AdminValidation { is_admin: true }).into_response(),
        ValidationScript::NotAdmin => Json(AdminValidation { is_admin: false }).into_response(),
        ValidationScript::Status(code) => {
            StatusCode::from_u16(code).map_or_else(
                |_| StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                IntoResponse::into_response,
            )
        }
        ValidationScript::MalformedBody => {
            Json(serde_json::json!({"unexpected": "shape"})).into_response()
        }
    }
}
