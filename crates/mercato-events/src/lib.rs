#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Notification event model for the Mercato admin console.
//!
//! The server push stream emits named events; `notification` payloads decode
//! into [`Notification`]. The kind enumeration is open at the consumption
//! boundary: unknown wire values map to [`NotificationKind::Unrecognized`]
//! instead of failing, so server-side additions never break deployed clients.

use serde::{Deserialize, Serialize};

/// Name of the handshake event emitted once per established connection.
pub const EVENT_CONNECTED: &str = "connected";

/// Name of the event carrying a [`Notification`] payload.
pub const EVENT_NOTIFICATION: &str = "notification";

/// Typed notification kinds pushed to authenticated admin sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// An existing order moved to a new fulfilment status.
    OrderStatusChanged,
    /// A courier picked up a shipment.
    DeliveryStarted,
    /// Inventory for a product fell below its threshold.
    StockLow,
    /// A new order was placed.
    NewOrder,
    /// Operational message from the platform itself.
    System,
    /// Any kind this client does not know about.
    #[serde(other)]
    Unrecognized,
}

impl NotificationKind {
    /// Machine-friendly discriminator matching the wire encoding.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::OrderStatusChanged => "order-status-changed",
            Self::DeliveryStarted => "delivery-started",
            Self::StockLow => "stock-low",
            Self::NewOrder => "new-order",
            Self::System => "system",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// A single push notification; consumed immediately, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline shown in the alert.
    pub title: String,
    /// Body text shown under the headline.
    pub message: String,
    /// Typed kind driving the dispatch policy.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationKind};

    #[test]
    fn kind_decodes_kebab_case_wire_values() {
        let raw = r#"{"title":"Order #1209","message":"Paid","type":"new-order"}"#;
        let parsed: Notification = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(parsed.kind, NotificationKind::NewOrder);
        assert_eq!(parsed.kind.kind(), "new-order");
    }

    #[test]
    fn unknown_kind_falls_back_to_unrecognized() {
        let raw = r#"{"title":"t","message":"m","type":"refund-window-closed"}"#;
        let parsed: Notification = serde_json::from_str(raw).expect("open enumeration");
        assert_eq!(parsed.kind, NotificationKind::Unrecognized);
    }

    #[test]
    fn kind_round_trips_for_known_values() {
        for kind in [
            NotificationKind::OrderStatusChanged,
            NotificationKind::DeliveryStarted,
            NotificationKind::StockLow,
            NotificationKind::NewOrder,
            NotificationKind::System,
        ] {
            let encoded = serde_json::to_string(&kind).expect("serializable");
            assert_eq!(encoded, format!("\"{}\"", kind.kind()));
        }
    }
}
