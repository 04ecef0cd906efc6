//! Shared UI models for alerts and the push-stream state.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Warning toast.
    Warning,
    /// Error toast.
    Error,
}

/// A queued toast with its own visibility window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier for dismissal.
    pub id: u64,
    /// Optional headline above the message.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Styling variant.
    pub kind: ToastKind,
    /// How long the toast stays visible.
    pub duration_ms: u32,
}

/// A toast before an identifier is assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    /// Optional headline above the message.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Styling variant.
    pub kind: ToastKind,
    /// How long the toast stays visible.
    pub duration_ms: u32,
}

impl ToastRequest {
    /// Informational toast with the default visibility window.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            kind: ToastKind::Info,
            duration_ms: crate::logic::notify::INFO_VISIBILITY_MS,
        }
    }

    /// Error toast with the default visibility window.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            kind: ToastKind::Error,
            duration_ms: crate::logic::notify::INFO_VISIBILITY_MS,
        }
    }
}

/// Connection state of the notification channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StreamState {
    /// No connection attempted (non-admin context or no credential).
    #[default]
    Idle,
    /// Handshake confirmed by the server.
    Connected,
    /// The connection ended; a fresh one is only made on the next mount.
    Closed {
        /// Why the connection ended.
        reason: String,
    },
}
