//! One service per API resource. Each method maps to a single endpoint and
//! returns the decoded response envelope; nothing here calls `validate()`.

use crate::client::StraddleClient;
use crate::errors::ClientError;
use crate::models::{
    ApiResponse, BridgeInitializeParams, BridgeLinkBankAccountParams, BridgeLinkPlaidParams,
    BridgeToken, Charge, ChargeCreateParams, Customer, CustomerCreateParams, CustomerListParams,
    CustomerReview, CustomerUpdateParams, FundingEvent, FundingEventListParams, PagedResponse,
    PaymentListParams, PaymentSummary, Paykey, PaykeyListParams, PaykeyReview, Payout,
    PayoutCreateParams, ReviewDecisionParams, StatusChangeParams,
};
use reqwest::Method;

pub struct CustomersService<'a> {
    client: &'a StraddleClient,
}

impl<'a> CustomersService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &CustomerCreateParams,
    ) -> Result<ApiResponse<Customer>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "customers"], params)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Customer>, ClientError> {
        self.client.call(Method::GET, &["v1", "customers", id]).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &CustomerUpdateParams,
    ) -> Result<ApiResponse<Customer>, ClientError> {
        self.client
            .send_json(Method::PUT, &["v1", "customers", id], params)
            .await
    }

    /// Deletes the customer and returns its final state.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Customer>, ClientError> {
        self.client.call(Method::DELETE, &["v1", "customers", id]).await
    }

    pub async fn list(
        &self,
        params: &CustomerListParams,
    ) -> Result<PagedResponse<Customer>, ClientError> {
        self.client
            .get_with_query(&["v1", "customers"], params)
            .await
    }

    /// Identity verification breakdown for a customer.
    pub async fn review(&self, id: &str) -> Result<ApiResponse<CustomerReview>, ClientError> {
        self.client
            .call(Method::GET, &["v1", "customers", id, "review"])
            .await
    }

    /// Manually verifies or rejects a customer that is in review.
    pub async fn decision(
        &self,
        id: &str,
        params: &ReviewDecisionParams,
    ) -> Result<ApiResponse<Customer>, ClientError> {
        self.client
            .send_json(Method::PATCH, &["v1", "customers", id, "review"], params)
            .await
    }

    /// Re-runs identity verification.
    pub async fn refresh_review(&self, id: &str) -> Result<ApiResponse<Customer>, ClientError> {
        self.client
            .call(Method::PUT, &["v1", "customers", id, "refresh_review"])
            .await
    }
}

pub struct PaykeysService<'a> {
    client: &'a StraddleClient,
}

impl<'a> PaykeysService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Paykey>, ClientError> {
        self.client.call(Method::GET, &["v1", "paykeys", id]).await
    }

    pub async fn list(
        &self,
        params: &PaykeyListParams,
    ) -> Result<PagedResponse<Paykey>, ClientError> {
        self.client.get_with_query(&["v1", "paykeys"], params).await
    }

    pub async fn review(&self, id: &str) -> Result<ApiResponse<PaykeyReview>, ClientError> {
        self.client
            .call(Method::GET, &["v1", "paykeys", id, "review"])
            .await
    }

    pub async fn decision(
        &self,
        id: &str,
        params: &ReviewDecisionParams,
    ) -> Result<ApiResponse<Paykey>, ClientError> {
        self.client
            .send_json(Method::PATCH, &["v1", "paykeys", id, "review"], params)
            .await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Paykey>, ClientError> {
        self.client
            .send_json(Method::PUT, &["v1", "paykeys", id, "cancel"], params)
            .await
    }
}

/// Links bank accounts to customers, producing paykeys.
pub struct BridgeService<'a> {
    client: &'a StraddleClient,
}

impl<'a> BridgeService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn initialize(
        &self,
        params: &BridgeInitializeParams,
    ) -> Result<ApiResponse<BridgeToken>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "bridge", "initialize"], params)
            .await
    }

    pub async fn link_bank_account(
        &self,
        params: &BridgeLinkBankAccountParams,
    ) -> Result<ApiResponse<Paykey>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "bridge", "bank_account"], params)
            .await
    }

    pub async fn link_plaid(
        &self,
        params: &BridgeLinkPlaidParams,
    ) -> Result<ApiResponse<Paykey>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "bridge", "plaid"], params)
            .await
    }
}

pub struct ChargesService<'a> {
    client: &'a StraddleClient,
}

impl<'a> ChargesService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &ChargeCreateParams,
    ) -> Result<ApiResponse<Charge>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "charges"], params)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Charge>, ClientError> {
        self.client.call(Method::GET, &["v1", "charges", id]).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Charge>, ClientError> {
        self.status_change(id, "cancel", params).await
    }

    pub async fn hold(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Charge>, ClientError> {
        self.status_change(id, "hold", params).await
    }

    pub async fn release(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Charge>, ClientError> {
        self.status_change(id, "release", params).await
    }

    async fn status_change(
        &self,
        id: &str,
        action: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Charge>, ClientError> {
        self.client
            .send_json(Method::PUT, &["v1", "charges", id, action], params)
            .await
    }
}

pub struct PayoutsService<'a> {
    client: &'a StraddleClient,
}

impl<'a> PayoutsService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &PayoutCreateParams,
    ) -> Result<ApiResponse<Payout>, ClientError> {
        self.client
            .send_json(Method::POST, &["v1", "payouts"], params)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Payout>, ClientError> {
        self.client.call(Method::GET, &["v1", "payouts", id]).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Payout>, ClientError> {
        self.status_change(id, "cancel", params).await
    }

    pub async fn hold(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Payout>, ClientError> {
        self.status_change(id, "hold", params).await
    }

    pub async fn release(
        &self,
        id: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Payout>, ClientError> {
        self.status_change(id, "release", params).await
    }

    async fn status_change(
        &self,
        id: &str,
        action: &str,
        params: &StatusChangeParams,
    ) -> Result<ApiResponse<Payout>, ClientError> {
        self.client
            .send_json(Method::PUT, &["v1", "payouts", id, action], params)
            .await
    }
}

/// Search across charges and payouts.
pub struct PaymentsService<'a> {
    client: &'a StraddleClient,
}

impl<'a> PaymentsService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &PaymentListParams,
    ) -> Result<PagedResponse<PaymentSummary>, ClientError> {
        self.client.get_with_query(&["v1", "payments"], params).await
    }
}

pub struct FundingEventsService<'a> {
    client: &'a StraddleClient,
}

impl<'a> FundingEventsService<'a> {
    pub(crate) fn new(client: &'a StraddleClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &FundingEventListParams,
    ) -> Result<PagedResponse<FundingEvent>, ClientError> {
        self.client
            .get_with_query(&["v1", "funding_events"], params)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<FundingEvent>, ClientError> {
        self.client
            .call(Method::GET, &["v1", "funding_events", id])
            .await
    }
}
