//! Dispatch policy for push notifications.
//!
//! # Design
//! - One pure function maps a notification kind onto alert styling,
//!   visibility, and whether list views should refresh.
//! - Unrecognized kinds get a neutral rendering; the enumeration is open at
//!   this boundary so server-side additions degrade gracefully.

use mercato_events::NotificationKind;

use crate::models::ToastKind;
use mercato_api_models::NOTIFICATION_STREAM_PATH;

/// Visibility for routine informational alerts.
pub const INFO_VISIBILITY_MS: u32 = 4_000;

/// Longer visibility for stock warnings.
pub const WARNING_VISIBILITY_MS: u32 = 6_000;

/// Longest visibility, reserved for new orders.
pub const NEW_ORDER_VISIBILITY_MS: u32 = 8_000;

/// How a single notification should be surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// Alert styling.
    pub kind: ToastKind,
    /// How long the alert stays visible.
    pub duration_ms: u32,
    /// Whether to raise the same-process refresh signal for list views.
    pub refresh: bool,
}

/// Map a notification kind onto its dispatch.
#[must_use]
pub const fn plan_dispatch(kind: NotificationKind) -> Dispatch {
    match kind {
        NotificationKind::OrderStatusChanged | NotificationKind::System => Dispatch {
            kind: ToastKind::Info,
            duration_ms: INFO_VISIBILITY_MS,
            refresh: false,
        },
        NotificationKind::DeliveryStarted => Dispatch {
            kind: ToastKind::Success,
            duration_ms: INFO_VISIBILITY_MS,
            refresh: false,
        },
        NotificationKind::StockLow => Dispatch {
            kind: ToastKind::Warning,
            duration_ms: WARNING_VISIBILITY_MS,
            refresh: false,
        },
        NotificationKind::NewOrder => Dispatch {
            kind: ToastKind::Success,
            duration_ms: NEW_ORDER_VISIBILITY_MS,
            refresh: true,
        },
        NotificationKind::Unrecognized => Dispatch {
            kind: ToastKind::Info,
            duration_ms: INFO_VISIBILITY_MS,
            refresh: false,
        },
    }
}

/// Build the stream connection URL.
///
/// The push transport cannot carry custom headers, so the credential rides
/// as a query parameter instead.
#[must_use]
pub fn build_stream_url(base: &str, token: &str) -> String {
    format!(
        "{}{NOTIFICATION_STREAM_PATH}?token={}",
        base.trim_end_matches('/'),
        urlencoding::encode(token)
    )
}

#[cfg(test)]
mod tests {
    use super::{
        INFO_VISIBILITY_MS, NEW_ORDER_VISIBILITY_MS, WARNING_VISIBILITY_MS, build_stream_url,
        plan_dispatch,
    };
    use crate::models::ToastKind;
    use mercato_events::NotificationKind;

    #[test]
    fn status_and_system_events_render_informational_alerts() {
        for kind in [NotificationKind::OrderStatusChanged, NotificationKind::System] {
            let dispatch = plan_dispatch(kind);
            assert_eq!(dispatch.kind, ToastKind::Info);
            assert_eq!(dispatch.duration_ms, INFO_VISIBILITY_MS);
            assert!(!dispatch.refresh);
        }
    }

    #[test]
    fn delivery_started_is_success_styled() {
        let dispatch = plan_dispatch(NotificationKind::DeliveryStarted);
        assert_eq!(dispatch.kind, ToastKind::Success);
        assert!(!dispatch.refresh);
    }

    #[test]
    fn stock_warnings_stay_visible_longer() {
        let dispatch = plan_dispatch(NotificationKind::StockLow);
        assert_eq!(dispatch.kind, ToastKind::Warning);
        assert_eq!(dispatch.duration_ms, WARNING_VISIBILITY_MS);
    }

    #[test]
    fn only_new_orders_raise_the_refresh_signal() {
        for kind in [
            NotificationKind::OrderStatusChanged,
            NotificationKind::DeliveryStarted,
            NotificationKind::StockLow,
            NotificationKind::System,
            NotificationKind::Unrecognized,
        ] {
            assert!(!plan_dispatch(kind).refresh);
        }
        let dispatch = plan_dispatch(NotificationKind::NewOrder);
        assert!(dispatch.refresh);
        assert_eq!(dispatch.duration_ms, NEW_ORDER_VISIBILITY_MS);
    }

    #[test]
    fn unrecognized_kinds_fall_back_to_neutral_rendering() {
        let dispatch = plan_dispatch(NotificationKind::Unrecognized);
        assert_eq!(dispatch.kind, ToastKind::Info);
    }

    #[test]
    fn stream_url_carries_the_encoded_credential() {
        assert_eq!(
            build_stream_url("https://api.mercato.shop/", "tok/123"),
            "https://api.mercato.shop/api/notifications/stream?token=tok%2F123"
        );
    }
}
