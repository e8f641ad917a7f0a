//! Payment sources: cards and bank accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Address;

/// A payment card, stored at merchant level or under a customer.
///
/// On retrieval the service masks `card_number` (e.g. `411111XXXXXX1111`)
/// and never returns `cvv2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Registration date (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// Full name of the card holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,

    /// Card number, 16 or 19 digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,

    /// Security code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<String>,

    /// Expiration month, two digits.
    #[serde(default)]
    pub expiration_month: String,

    /// Expiration year, two digits.
    #[serde(default)]
    pub expiration_year: String,

    /// Billing address of the holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Charges can be performed with the card.
    #[serde(default)]
    pub allows_charges: bool,

    /// Payouts can be sent to the card.
    #[serde(default)]
    pub allows_payouts: bool,

    /// Points-based card.
    #[serde(default)]
    pub points_card: bool,

    /// `visa`, `mastercard`, `carnet` or `american_express`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// `debit`, `credit` or `cash`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    /// Issuer bank name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Issuer bank code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Owning customer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Device fingerprint from the fraud prevention tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,
}

/// A customer's bank account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Registration date (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// Friendly account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Full name of the account holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,

    /// 18-digit CLABE. Masked on retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,

    /// Bank name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Bank code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
}

/// Loyalty points used by a card transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPoints {
    /// Points used.
    #[serde(default)]
    pub used: u64,

    /// Points remaining after the transaction.
    #[serde(default)]
    pub remaining: u64,

    /// Amount paid with points.
    #[serde(default)]
    pub amount: f64,

    /// Message to display to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
