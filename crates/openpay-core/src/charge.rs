//! Charge requests and the transactions they produce.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{BankAccount, Card, CardPoints};
use crate::customer::Customer;

/// Valid values for [`Charge::method`].
pub struct ChargeMethod;

impl ChargeMethod {
    /// Card payment.
    pub const CARD: &'static str = "card";
    /// Cash payment at a convenience store.
    pub const STORE: &'static str = "store";
    /// Bank transfer reference.
    pub const BANK_ACCOUNT: &'static str = "bank_account";
}

/// Fields shared by every kind of charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// One of the [`ChargeMethod`] values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Amount, up to two decimal digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// `MXN` or `USD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Free-form description of the charge origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Order identifier, unique across all transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Customer information. Required for merchant-level charges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// For redirect payments, email the payment form to the customer.
    #[serde(default)]
    pub send_email: bool,

    /// For redirect payments, where to send the customer afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// A charge against a stored card id or a card token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeWithStoredCard {
    /// Shared charge fields.
    #[serde(flatten)]
    pub charge: Charge,

    /// Id or token of a previously stored card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    /// Security code, required for stored cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<String>,

    /// Device fingerprint from the fraud prevention tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,

    /// Charge immediately (`true`) or only reserve the funds for a later capture.
    #[serde(default)]
    pub capture: bool,

    /// `ONLY_POINTS`, `MIXED` or `NONE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_card_points: Option<String>,

    /// Run 3D Secure authentication.
    #[serde(default)]
    pub use_3d_secure: bool,

    /// Monthly installments, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<PaymentPlan>,

    /// Additional transaction metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// A cash charge payable at a convenience store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAtStore {
    /// Shared charge fields.
    #[serde(flatten)]
    pub charge: Charge,

    /// When the payment reference expires.
    pub due_date: DateTime<Utc>,
}

/// A charge payable by bank transfer reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAtBank {
    /// Shared charge fields.
    #[serde(flatten)]
    pub charge: Charge,

    /// When the payment reference expires.
    pub due_date: DateTime<Utc>,
}

/// Monthly installments plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    /// Number of installments: 3, 6, 9 or 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<String>,
}

/// An executed transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Authorization code from the processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// `fee`, `charge`, `payout` or `transfer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    /// `in` or `out`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    /// Order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Customer the transaction belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Amount, up to two decimal digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// `MXN` or `USD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Payment method used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Creation date (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// `completed`, `in_progress` or `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Set on failed transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bank account used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,

    /// Card used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    /// Card points used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_points: Option<CardPoints>,
}
