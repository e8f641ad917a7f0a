//! Merchant-level charge and card operations.

use async_trait::async_trait;
use openpay_core::{
    Card, ChargeAtBank, ChargeAtStore, ChargeWithStoredCard, ChargesListRequest, Transaction,
};
use serde::Serialize;

use crate::client::{path_join, OpenpayClient, RequestOptions};
use crate::error::Result;

/// Charges executed at merchant level.
#[async_trait]
pub trait ChargesApi: Send + Sync {
    /// Store a card at merchant level. The response is written back into
    /// `card`.
    async fn add_card(&self, card: &mut Card) -> Result<()>;

    /// Fetch a transaction.
    async fn get(&self, transaction_id: &str) -> Result<Transaction>;

    /// List charges matching the filters.
    async fn list(&self, request: &ChargesListRequest) -> Result<Vec<Transaction>>;

    /// Create a cash charge payable at a convenience store.
    async fn at_store(&self, charge: &ChargeAtStore) -> Result<Transaction>;

    /// Create a charge payable by bank transfer.
    async fn at_bank(&self, charge: &ChargeAtBank) -> Result<Transaction>;

    /// Charge a stored card or card token.
    async fn with_card(&self, charge: &ChargeWithStoredCard) -> Result<Transaction>;

    /// Capture funds previously reserved with `capture: false`.
    async fn capture(&self, transaction_id: &str, amount: f64) -> Result<Transaction>;

    /// Refund a charge.
    async fn refund(
        &self,
        transaction_id: &str,
        amount: f64,
        description: &str,
    ) -> Result<Transaction>;
}

#[derive(Serialize)]
struct CaptureRequest {
    amount: f64,
}

#[derive(Serialize)]
struct RefundRequest<'a> {
    amount: f64,
    description: &'a str,
}

/// [`ChargesApi`] bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct Charges<'a> {
    client: &'a OpenpayClient,
}

impl<'a> Charges<'a> {
    pub(crate) fn new(client: &'a OpenpayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChargesApi for Charges<'_> {
    async fn add_card(&self, card: &mut Card) -> Result<()> {
        let request = RequestOptions::post("cards").json(&*card)?;
        self.client.request_into(request, card).await
    }

    async fn get(&self, transaction_id: &str) -> Result<Transaction> {
        self.client
            .request_json(RequestOptions::get(path_join(&["charges", transaction_id])))
            .await
    }

    async fn list(&self, request: &ChargesListRequest) -> Result<Vec<Transaction>> {
        self.client
            .request_json(RequestOptions::get("charges").query(request)?)
            .await
    }

    async fn at_store(&self, charge: &ChargeAtStore) -> Result<Transaction> {
        self.client
            .request_json(RequestOptions::post("charges").json(charge)?)
            .await
    }

    async fn at_bank(&self, charge: &ChargeAtBank) -> Result<Transaction> {
        self.client
            .request_json(RequestOptions::post("charges").json(charge)?)
            .await
    }

    async fn with_card(&self, charge: &ChargeWithStoredCard) -> Result<Transaction> {
        self.client
            .request_json(RequestOptions::post("charges").json(charge)?)
            .await
    }

    async fn capture(&self, transaction_id: &str, amount: f64) -> Result<Transaction> {
        let request = RequestOptions::post(path_join(&["charges", transaction_id, "capture"]))
            .json(&CaptureRequest { amount })?;
        self.client.request_json(request).await
    }

    async fn refund(
        &self,
        transaction_id: &str,
        amount: f64,
        description: &str,
    ) -> Result<Transaction> {
        let request = RequestOptions::post(path_join(&["charges", transaction_id, "refund"]))
            .json(&RefundRequest {
                amount,
                description,
            })?;
        self.client.request_json(request).await
    }
}
