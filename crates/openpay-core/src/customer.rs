//! Customer types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An individual customer registered under the merchant.
///
/// Server-assigned fields (`id`, `creation_date`, `status`, `balance`,
/// `clabe`, `store`) are left unset when creating a customer and filled in
/// from the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Merchant-side unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Whether the customer can hold a balance.
    #[serde(default)]
    pub requires_account: bool,

    /// Registration date (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Registry status (`active` or `deleted`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Current balance, up to two decimal digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,

    /// CLABE account for transfers from any Mexican bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,

    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Reference for payments at convenience stores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number. Required by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    /// Building, suite or delegation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// Area or neighborhood.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,

    /// Postal code. Required by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// State. Required by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// City. Required by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166-1 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Convenience store payment reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Charge reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Barcode to be scanned at the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_url: Option<String>,

    /// Reference for stores supporting Paybin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paybin_reference: Option<String>,

    /// Barcode for stores supporting Paybin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_paybin_url: Option<String>,
}
