//! Credential store spanning two storage domains.
//!
//! # Design
//! - The private browser store is authoritative for page code; the cookie is
//!   authoritative for the edge interception layer, which cannot see the
//!   private store.
//! - The two writes are not transactional; the narrow window where one
//!   domain is updated and the other is not is a known race, not hidden.
//! - Every operation is a no-op outside a browser context.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use mercato_api_models::SESSION_STORAGE_KEY;

use crate::logic::session::{expired_session_cookie, session_cookie};

/// Handle to the process-wide credential storage.
///
/// Threaded explicitly through the request gateway and the notification
/// channel so every consumer's dependency on the session is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStore;

impl SessionStore {
    /// Create a handle over the browser-backed storage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Persist a credential to both storage domains.
    pub fn set(self, token: &str) {
        if web_sys::window().is_none() {
            return;
        }
        if let Err(error) = LocalStorage::set(SESSION_STORAGE_KEY, token) {
            console::error!("session storage write failed", error.to_string());
        }
        write_cookie(&session_cookie(token));
    }

    /// Read the credential from the private store only.
    #[must_use]
    pub fn get(self) -> Option<String> {
        web_sys::window()?;
        LocalStorage::get::<String>(SESSION_STORAGE_KEY)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    /// Invalidate both domains.
    ///
    /// The cookie is deleted by writing an already-expired lifetime; the
    /// cookie API has no removal primitive.
    pub fn clear(self) {
        if web_sys::window().is_none() {
            return;
        }
        LocalStorage::delete(SESSION_STORAGE_KEY);
        write_cookie(&expired_session_cookie());
    }

    /// Whether a credential is currently present.
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self.get().is_some()
    }
}

fn write_cookie(cookie: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.dyn_into::<HtmlDocument>() {
        Ok(html) => {
            if let Err(error) = html.set_cookie(cookie) {
                console::error!("session cookie write failed", format!("{error:?}"));
            }
        }
        Err(_) => console::error!("document does not expose a cookie jar"),
    }
}
