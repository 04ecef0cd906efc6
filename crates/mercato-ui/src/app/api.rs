//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Equality is pointer identity so context consumers re-render only when
//!   the client itself is replaced.

use std::rc::Rc;

use crate::core::session::SessionStore;
use crate::services::api::ApiClient;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub(crate) client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL and session store.
    pub(crate) fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, session)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
