//! Openpay Client SDK.
//!
//! This crate provides a typed client for the Openpay payments API:
//! customers, stored cards, bank accounts, charges and webhook
//! subscriptions. Every operation is a single HTTPS request authenticated
//! with the merchant's private API key.
//!
//! # Example
//!
//! ```no_run
//! use openpay_client::{CustomersApi, OpenpayClient};
//! use openpay_client::types::Customer;
//!
//! # async fn example() -> Result<(), openpay_client::OpenpayError> {
//! let client = OpenpayClient::new("sk_e568c42a6c384b7ab02cd47d2e407cab", "mzdtln0bmtms6o3kck8f", None)?;
//!
//! let mut customer = Customer {
//!     name: Some("Rick".to_string()),
//!     email: Some("rick@mail.com".to_string()),
//!     ..Customer::default()
//! };
//! client.customers().create(&mut customer).await?;
//!
//! println!("Created customer {:?}", customer.id);
//! # Ok(())
//! # }
//! ```
//!
//! The resource accessors (`customers()`, `charges()`, `webhooks()`) return
//! handles implementing [`CustomersApi`], [`ChargesApi`] and [`WebhooksApi`];
//! bring the trait into scope to call its methods.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod charges;
mod client;
mod config;
mod customers;
mod error;
mod webhooks;

#[cfg(test)]
mod testing;

pub use charges::{Charges, ChargesApi};
pub use client::OpenpayClient;
pub use config::{ClientOptions, Environment, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use customers::{Customers, CustomersApi};
pub use error::{OpenpayError, Result};
pub use webhooks::{Webhooks, WebhooksApi};

/// Wire types, re-exported from `openpay-core`.
pub mod types {
    pub use openpay_core::*;
}
