//! Webhook subscription operations.

use async_trait::async_trait;
use openpay_core::Webhook;

use crate::client::{path_join, OpenpayClient, RequestOptions};
use crate::error::Result;

/// Webhook management.
#[async_trait]
pub trait WebhooksApi: Send + Sync {
    /// Register a webhook. The response, including the assigned id and
    /// verification status, is written back into `webhook`.
    async fn create(&self, webhook: &mut Webhook) -> Result<()>;

    /// Fetch a webhook.
    async fn get(&self, webhook_id: &str) -> Result<Webhook>;

    /// List every webhook of the merchant.
    async fn list(&self) -> Result<Vec<Webhook>>;

    /// Delete a webhook.
    async fn delete(&self, webhook_id: &str) -> Result<()>;
}

/// [`WebhooksApi`] bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a OpenpayClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a OpenpayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhooksApi for Webhooks<'_> {
    async fn create(&self, webhook: &mut Webhook) -> Result<()> {
        let request = RequestOptions::post("webhooks").json(&*webhook)?;
        self.client.request_into(request, webhook).await
    }

    async fn get(&self, webhook_id: &str) -> Result<Webhook> {
        self.client
            .request_json(RequestOptions::get(path_join(&["webhooks", webhook_id])))
            .await
    }

    async fn list(&self) -> Result<Vec<Webhook>> {
        self.client
            .request_json(RequestOptions::get("webhooks"))
            .await
    }

    async fn delete(&self, webhook_id: &str) -> Result<()> {
        self.client
            .request(RequestOptions::delete(path_join(&["webhooks", webhook_id])))
            .await
            .map(drop)
    }
}
