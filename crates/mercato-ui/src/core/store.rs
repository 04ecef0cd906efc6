//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The refresh tick is the same-process broadcast signal: list views watch
//!   it and refetch whenever it advances.

use yewdux::store::Store;

use crate::models::StreamState;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub(crate) struct AppStore {
    /// Credential mirrored from the session store for reactive rendering.
    pub(crate) credential: Option<String>,
    /// Notification channel connection state.
    pub(crate) stream: StreamState,
    /// Broadcast signal: bumped once per new-order notification.
    pub(crate) orders_refresh: u64,
}
