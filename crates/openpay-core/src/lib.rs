//! Core types for the Openpay payments API.
//!
//! This crate holds the JSON wire representation of every resource the
//! client exchanges with the service:
//!
//! - **Customers**: `Customer`, `Address`, `Store`
//! - **Payment sources**: `Card`, `BankAccount`, `CardPoints`
//! - **Charges**: `Charge`, `ChargeWithStoredCard`, `ChargeAtStore`, `ChargeAtBank`, `Transaction`
//! - **Webhooks**: `Webhook`
//! - **Listing filters**: `ListRequest`, `CustomersListRequest`, `ChargesListRequest`
//! - **Errors**: `ApiError`, `ErrorCategory`
//!
//! Field names follow the remote API exactly. Optional fields are omitted
//! from request bodies when unset.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod charge;
pub mod customer;
pub mod error;
pub mod list;
pub mod webhook;

pub use card::{BankAccount, Card, CardPoints};
pub use charge::{
    Charge, ChargeAtBank, ChargeAtStore, ChargeMethod, ChargeWithStoredCard, PaymentPlan,
    Transaction,
};
pub use customer::{Address, Customer, Store};
pub use error::{ApiError, ErrorCategory};
pub use list::{ChargesListRequest, CustomersListRequest, ListRequest};
pub use webhook::Webhook;
