//! Webhook subscription types.

use serde::{Deserialize, Serialize};

/// A webhook endpoint subscribed to service events.
///
/// Event names include `charge.succeeded`, `charge.refunded`,
/// `charge.failed`, `payout.created`, `spei.received`, `chargeback.created`
/// and `order.completed`, among others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Endpoint receiving the events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Username for basic credentials on delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Password for basic credentials on delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// `verified` or `unverified`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Events delivered to the endpoint.
    #[serde(default)]
    pub event_types: Vec<String>,
}
