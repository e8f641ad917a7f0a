//! Customer operations, including cards and bank accounts stored under a
//! customer.

use async_trait::async_trait;
use openpay_core::{BankAccount, Card, Customer, CustomersListRequest, ListRequest};

use crate::client::{path_join, OpenpayClient, RequestOptions};
use crate::error::Result;

/// Customer management.
///
/// `create`, `update`, `add_card` and `add_bank_account` write the service
/// response back into the value passed in, so server-assigned fields such
/// as `id` and `creation_date` appear on the caller's object.
#[async_trait]
pub trait CustomersApi: Send + Sync {
    /// Register a new customer.
    async fn create(&self, customer: &mut Customer) -> Result<()>;

    /// Update an existing customer, addressed by `customer.id`.
    async fn update(&self, customer: &mut Customer) -> Result<()>;

    /// Fetch a customer.
    async fn get(&self, customer_id: &str) -> Result<Customer>;

    /// List customers matching the filters.
    async fn list(&self, request: &CustomersListRequest) -> Result<Vec<Customer>>;

    /// Delete a customer.
    async fn delete(&self, customer_id: &str) -> Result<()>;

    /// Store a card under a customer.
    async fn add_card(&self, customer_id: &str, card: &mut Card) -> Result<()>;

    /// Fetch a customer's card.
    async fn get_card(&self, customer_id: &str, card_id: &str) -> Result<Card>;

    /// List a customer's cards.
    async fn list_cards(&self, customer_id: &str, request: &ListRequest) -> Result<Vec<Card>>;

    /// Delete a customer's card.
    async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<()>;

    /// Register a bank account under a customer.
    async fn add_bank_account(&self, customer_id: &str, account: &mut BankAccount)
        -> Result<()>;

    /// Fetch a customer's bank account.
    async fn get_bank_account(&self, customer_id: &str, account_id: &str)
        -> Result<BankAccount>;

    /// List a customer's bank accounts.
    async fn list_bank_accounts(
        &self,
        customer_id: &str,
        request: &ListRequest,
    ) -> Result<Vec<BankAccount>>;

    /// Delete a customer's bank account.
    async fn delete_bank_account(&self, customer_id: &str, account_id: &str) -> Result<()>;
}

/// [`CustomersApi`] bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a OpenpayClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a OpenpayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomersApi for Customers<'_> {
    async fn create(&self, customer: &mut Customer) -> Result<()> {
        let request = RequestOptions::post("customers").json(&*customer)?;
        self.client.request_into(request, customer).await
    }

    async fn update(&self, customer: &mut Customer) -> Result<()> {
        let id = customer.id.as_deref().unwrap_or_default();
        let request = RequestOptions::put(path_join(&["customers", id])).json(&*customer)?;
        self.client.request_into(request, customer).await
    }

    async fn get(&self, customer_id: &str) -> Result<Customer> {
        self.client
            .request_json(RequestOptions::get(path_join(&["customers", customer_id])))
            .await
    }

    async fn list(&self, request: &CustomersListRequest) -> Result<Vec<Customer>> {
        self.client
            .request_json(RequestOptions::get("customers").query(request)?)
            .await
    }

    async fn delete(&self, customer_id: &str) -> Result<()> {
        self.client
            .request(RequestOptions::delete(path_join(&["customers", customer_id])))
            .await
            .map(drop)
    }

    async fn add_card(&self, customer_id: &str, card: &mut Card) -> Result<()> {
        let request =
            RequestOptions::post(path_join(&["customers", customer_id, "cards"])).json(&*card)?;
        self.client.request_into(request, card).await
    }

    async fn get_card(&self, customer_id: &str, card_id: &str) -> Result<Card> {
        self.client
            .request_json(RequestOptions::get(path_join(&[
                "customers",
                customer_id,
                "cards",
                card_id,
            ])))
            .await
    }

    async fn list_cards(&self, customer_id: &str, request: &ListRequest) -> Result<Vec<Card>> {
        self.client
            .request_json(
                RequestOptions::get(path_join(&["customers", customer_id, "cards"]))
                    .query(request)?,
            )
            .await
    }

    async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<()> {
        self.client
            .request(RequestOptions::delete(path_join(&[
                "customers",
                customer_id,
                "cards",
                card_id,
            ])))
            .await
            .map(drop)
    }

    async fn add_bank_account(
        &self,
        customer_id: &str,
        account: &mut BankAccount,
    ) -> Result<()> {
        let request =
            RequestOptions::post(path_join(&["customers", customer_id, "bankaccounts"]))
                .json(&*account)?;
        self.client.request_into(request, account).await
    }

    async fn get_bank_account(&self, customer_id: &str, account_id: &str) -> Result<BankAccount> {
        self.client
            .request_json(RequestOptions::get(path_join(&[
                "customers",
                customer_id,
                "bankaccounts",
                account_id,
            ])))
            .await
    }

    async fn list_bank_accounts(
        &self,
        customer_id: &str,
        request: &ListRequest,
    ) -> Result<Vec<BankAccount>> {
        self.client
            .request_json(
                RequestOptions::get(path_join(&["customers", customer_id, "bankaccounts"]))
                    .query(request)?,
            )
            .await
    }

    async fn delete_bank_account(&self, customer_id: &str, account_id: &str) -> Result<()> {
        self.client
            .request(RequestOptions::delete(path_join(&[
                "customers",
                customer_id,
                "bankaccounts",
                account_id,
            ])))
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{merchant_path, mock_client};
    use crate::OpenpayError;
    use openpay_core::Address;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rick() -> Customer {
        Customer {
            name: Some("Rick".to_string()),
            last_name: Some("Sanchez".to_string()),
            email: Some("a@b.com".to_string()),
            address: Some(Address {
                line1: Some("Calle 6 #910".to_string()),
                city: Some("Cordoba".to_string()),
                state: Some("VER".to_string()),
                country_code: Some("MX".to_string()),
                postal_code: Some("94560".to_string()),
                ..Address::default()
            }),
            ..Customer::default()
        }
    }

    #[tokio::test]
    async fn create_fills_in_server_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(merchant_path("customers")))
            .and(body_partial_json(json!({ "name": "Rick", "email": "a@b.com" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"id":"cus_123","email":"a@b.com"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let mut customer = rick();
        client.customers().create(&mut customer).await.unwrap();

        assert_eq!(customer.id.as_deref(), Some("cus_123"));
        assert_eq!(customer.email.as_deref(), Some("a@b.com"));
        assert_eq!(customer.name.as_deref(), Some("Rick"));
    }

    #[tokio::test]
    async fn create_rejected_leaves_customer_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"error_code":1001,"category":"request","description":"email is invalid",
                    "http_code":400,"request_id":"req-9"}"#,
            ))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let mut customer = rick();
        let err = client.customers().create(&mut customer).await.unwrap_err();

        assert!(matches!(err, OpenpayError::Api { status: 400, .. }));
        assert_eq!(
            err.api_error().and_then(|e| e.request_id.as_deref()),
            Some("req-9")
        );
        assert_eq!(customer, rick());
    }

    #[tokio::test]
    async fn update_puts_to_customer_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(merchant_path("customers/cus_123")))
            .and(body_partial_json(json!({ "id": "cus_123", "phone_number": "5544556677" })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"cus_123","phone_number":"5544556677","status":"active"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let mut customer = Customer {
            id: Some("cus_123".to_string()),
            phone_number: Some("5544556677".to_string()),
            ..rick()
        };
        client.customers().update(&mut customer).await.unwrap();

        assert_eq!(customer.status.as_deref(), Some("active"));
        assert_eq!(customer.last_name.as_deref(), Some("Sanchez"));
    }

    #[tokio::test]
    async fn get_and_list_decode_customers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers/cus_123")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"id":"cus_123","email":"a@b.com"}"#),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers")))
            .and(query_param("external_id", "ext-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"id":"cus_1"},{"id":"cus_2"}]"#),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let customer = client.customers().get("cus_123").await.unwrap();
        assert_eq!(customer.email.as_deref(), Some("a@b.com"));

        let list = client
            .customers()
            .list(&CustomersListRequest {
                external_id: Some("ext-1".to_string()),
                ..CustomersListRequest::default()
            })
            .await
            .unwrap();
        let ids: Vec<_> = list.iter().filter_map(|c| c.id.as_deref()).collect();
        assert_eq!(ids, ["cus_1", "cus_2"]);
    }

    #[tokio::test]
    async fn delete_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(merchant_path("customers/cus_123")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client.customers().delete("cus_123").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn card_operations_use_customer_scoped_paths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(merchant_path("customers/cus_1/cards")))
            .and(body_json(json!({
                "holder_name": "Rick Sanchez",
                "card_number": "4111111111111111",
                "cvv2": "401",
                "expiration_month": "10",
                "expiration_year": "29",
                "allows_charges": false,
                "allows_payouts": false,
                "points_card": false,
                "customer_id": "cus_1",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(
                r#"{"id":"card_9","card_number":"411111XXXXXX1111","brand":"visa",
                    "allows_charges":true,"expiration_month":"10","expiration_year":"29",
                    "creation_date":"2024-03-01T10:00:00-06:00"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers/cus_1/cards/card_9")))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"card_9","card_number":"411111XXXXXX1111"}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers/cus_1/cards")))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":"card_9"}]"#))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(merchant_path("customers/cus_1/cards/card_9")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let customers = client.customers();

        let mut card = Card {
            holder_name: Some("Rick Sanchez".to_string()),
            card_number: Some("4111111111111111".to_string()),
            cvv2: Some("401".to_string()),
            expiration_month: "10".to_string(),
            expiration_year: "29".to_string(),
            customer_id: Some("cus_1".to_string()),
            ..Card::default()
        };
        customers.add_card("cus_1", &mut card).await.unwrap();
        assert_eq!(card.id.as_deref(), Some("card_9"));
        assert_eq!(card.card_number.as_deref(), Some("411111XXXXXX1111"));
        assert!(card.allows_charges);
        assert!(card.creation_date.is_some());
        assert_eq!(card.cvv2.as_deref(), Some("401"));

        let fetched = customers.get_card("cus_1", "card_9").await.unwrap();
        assert_eq!(fetched.card_number.as_deref(), Some("411111XXXXXX1111"));

        let list = customers
            .list_cards(
                "cus_1",
                &ListRequest {
                    limit: Some(2),
                    ..ListRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(list.len(), 1);

        customers.delete_card("cus_1", "card_9").await.unwrap();
    }

    #[tokio::test]
    async fn bank_account_operations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(merchant_path("customers/cus_1/bankaccounts")))
            .and(body_json(json!({
                "holder_name": "Juan Hernández Sánchez",
                "clabe": "012298026516924616",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ba_1","clabe":"012XXXXXXXXXX24616","bank_name":"BANCOMER"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers/cus_1/bankaccounts/ba_1")))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ba_1","clabe":"012XXXXXXXXXX24616"}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(merchant_path("customers/cus_1/bankaccounts")))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":"ba_1"}]"#))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(merchant_path("customers/cus_1/bankaccounts/ba_1")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let customers = client.customers();

        let mut account = BankAccount {
            holder_name: Some("Juan Hernández Sánchez".to_string()),
            clabe: Some("012298026516924616".to_string()),
            ..BankAccount::default()
        };
        customers
            .add_bank_account("cus_1", &mut account)
            .await
            .unwrap();
        assert_eq!(account.id.as_deref(), Some("ba_1"));
        assert_eq!(account.clabe.as_deref(), Some("012XXXXXXXXXX24616"));
        assert_eq!(account.bank_name.as_deref(), Some("BANCOMER"));

        let fetched = customers.get_bank_account("cus_1", "ba_1").await.unwrap();
        assert_eq!(fetched.clabe.as_deref(), Some("012XXXXXXXXXX24616"));

        let list = customers
            .list_bank_accounts("cus_1", &ListRequest::default())
            .await
            .unwrap();
        assert_eq!(list.len(), 1);

        customers.delete_bank_account("cus_1", "ba_1").await.unwrap();
    }

    #[tokio::test]
    async fn not_found_propagates_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"category":"request","error_code":1005,"description":"The customer with id 'nope' does not exist","http_code":404}"#,
            ))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.customers().get("nope").await.unwrap_err();

        let api = err.api_error().unwrap();
        assert_eq!(api.error_code, 1005);
        assert_eq!(api.http_code, 404);
    }
}
