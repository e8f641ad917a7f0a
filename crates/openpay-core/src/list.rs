//! Filters for list endpoints.
//!
//! These are sent as URL query parameters. Range filters use the bracketed
//! names the API expects (`creation[gte]`, `amount[lte]`).

use serde::{Deserialize, Serialize};

/// Paging and creation-date filters shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Maximum number of records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Paging offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Exact creation date, `yyyy-mm-dd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,

    /// Created on or after, `yyyy-mm-dd`.
    #[serde(
        rename = "creation[gte]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_gte: Option<String>,

    /// Created on or before, `yyyy-mm-dd`.
    #[serde(
        rename = "creation[lte]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_lte: Option<String>,
}

/// Customer list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersListRequest {
    /// Paging and date filters.
    #[serde(flatten)]
    pub list: ListRequest,

    /// Merchant-side customer identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Charge list filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargesListRequest {
    /// Exact amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Amount lower bound.
    #[serde(
        rename = "amount[gte]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_gte: Option<String>,

    /// Amount upper bound.
    #[serde(
        rename = "amount[lte]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_lte: Option<String>,

    /// `IN_PROGRESS`, `COMPLETED`, `REFUNDED`, `CHARGEBACK_PENDING`,
    /// `CHARGEBACK_ACCEPTED`, `CHARGEBACK_ADJUSTMENT`, `CHARGE_PENDING`,
    /// `CANCELLED` or `FAILED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Charges for a specific order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}
