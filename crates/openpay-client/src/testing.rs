//! Shared helpers for tests against a mock server.

use wiremock::MockServer;

use crate::{ClientOptions, OpenpayClient};

/// Merchant used by the mock clients.
pub(crate) const MERCHANT_ID: &str = "mzdtln0bmtms6o3kck8f";

/// API key used by the mock clients.
pub(crate) const API_KEY: &str = "sk_test_key";

/// Client pointed at `server` with default options.
pub(crate) fn mock_client(server: &MockServer) -> OpenpayClient {
    OpenpayClient::with_endpoint(API_KEY, MERCHANT_ID, ClientOptions::default(), &server.uri())
        .expect("mock client")
}

/// Path the mock server sees for a merchant-scoped fragment.
pub(crate) fn merchant_path(fragment: &str) -> String {
    format!("/v1/{MERCHANT_ID}/{fragment}")
}
