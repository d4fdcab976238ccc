/// Integration tests with a mocked Straddle API
/// Exercises every service against wiremock without hitting the real hosts
use chrono::NaiveDate;
use serde_json::{json, Value};
use straddle_client::errors::ClientError;
use straddle_client::model::prelude::*;
use straddle_client::models::*;
use straddle_client::{ClientConfig, StraddleClient};
use wiremock::matchers::{
    bearer_token, body_json, header, header_exists, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a client pointed at the mock server
fn create_test_client(server: &MockServer) -> StraddleClient {
    StraddleClient::new(ClientConfig::new("sk_test_key").with_base_url(server.uri()))
        .expect("client should build")
}

fn envelope(data: Value) -> Value {
    json!({
        "meta": {"api_request_id": "req_123", "api_request_timestamp": "2024-05-01T12:00:00Z"},
        "response_type": "object",
        "data": data
    })
}

fn paged(data: Vec<Value>) -> Value {
    json!({
        "meta": {
            "api_request_id": "req_456",
            "api_request_timestamp": "2024-05-01T12:00:00Z",
            "page_number": 1,
            "page_size": 100,
            "total_items": data.len(),
            "max_page_size": 1000,
            "sort_by": "created_at",
            "sort_order": "asc"
        },
        "response_type": "array",
        "data": data
    })
}

fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Ada Lovelace",
        "type": "individual",
        "email": "ada@example.com",
        "phone": "+12125550100",
        "status": "verified",
        "external_id": null,
        "compliance_profile": {"dob": "1990-01-01", "ssn": "***-**-1234"},
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

fn paykey_json(id: &str) -> Value {
    json!({
        "id": id,
        "paykey": "6a1f...token",
        "customer_id": "cus_1",
        "label": "Chase Checking ****1234",
        "source": "bank_account",
        "status": "active",
        "institution_name": "Chase",
        "bank_data": {"account_number": "****1234", "account_type": "checking", "routing_number": "021000021"},
        "balance": {"status": "completed", "account_balance": 125000},
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

fn charge_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "amount": 10000,
        "currency": "USD",
        "description": "Invoice 42",
        "paykey": "6a1f...token",
        "payment_date": "2024-06-01",
        "consent_type": "internet",
        "device": {"ip_address": "192.0.2.1"},
        "external_id": null,
        "status": status,
        "funding_id": null,
        "created_at": "2024-06-01T09:00:00Z",
        "updated_at": "2024-06-01T09:00:00Z"
    })
}

#[tokio::test]
async fn test_customer_create_sends_builder_fields_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(bearer_token("sk_test_key"))
        .and(header_exists("Idempotency-Key"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "type": "individual",
            "email": "ada@example.com",
            "phone": "+12125550100",
            "device": {"ip_address": "192.0.2.1"},
            "external_id": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(customer_json("cus_1"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let params = CustomerCreateParams::builder()
        .name("Ada Lovelace")
        .customer_type(CustomerType::Individual)
        .email("ada@example.com")
        .phone("+12125550100")
        .device(Device::builder().ip_address("192.0.2.1").build().unwrap())
        .external_id(None)
        .build()
        .unwrap();

    let response = client.customers().create(&params).await.unwrap();
    let customer = response.data().unwrap();

    assert_eq!(customer.id(), Some("cus_1"));
    assert_eq!(customer.status().and_then(|s| s.known()), Some(CustomerStatus::Verified));
    assert!(customer
        .compliance_profile()
        .value()
        .and_then(|p| p.as_individual())
        .is_some());
    assert!(response.validate().is_ok());
}

#[tokio::test]
async fn test_customer_get_update_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("cus_1"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/customers/cus_1"))
        .and(body_json(json!({"email": "ada@new.example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("cus_1"))))
        .mount(&mock_server)
        .await;

    let mut inactive = customer_json("cus_1");
    inactive["status"] = json!("inactive");
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(inactive)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let customers = client.customers();

    let fetched = customers.get("cus_1").await.unwrap();
    assert_eq!(fetched.data().and_then(|c| c.name()), Some("Ada Lovelace"));
    assert_eq!(fetched.meta().and_then(|m| m.api_request_id()), Some("req_123"));

    let update = CustomerUpdateParams::builder()
        .email("ada@new.example.com")
        .build()
        .unwrap();
    assert!(customers.update("cus_1", &update).await.is_ok());

    let deleted = customers.delete("cus_1").await.unwrap();
    assert_eq!(
        deleted.data().and_then(|c| c.status()).map(|s| s.as_str()),
        Some("inactive")
    );
}

#[tokio::test]
async fn test_customer_list_passes_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("status", "review"))
        .and(query_param("page_size", "25"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(paged(vec![customer_json("cus_1"), customer_json("cus_2")])),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let params = CustomerListParams {
        status: Some(CustomerStatus::Review.into()),
        page_size: Some(25),
        ..Default::default()
    };

    let page = client.customers().list(&params).await.unwrap();
    assert_eq!(page.data().len(), 2);
    assert_eq!(page.data()[1].id(), Some("cus_2"));
    assert_eq!(page.meta().and_then(|m| m.total_items()), Some(2));
    assert!(!page.meta().unwrap().has_more());
}

#[tokio::test]
async fn test_customer_review_decision_and_refresh() {
    let mock_server = MockServer::start().await;

    let review = json!({
        "customer_details": customer_json("cus_1"),
        "identity_details": {
            "review_id": "rev_1",
            "decision": "review",
            "breakdown": {
                "email": {"decision": "accept", "risk_score": 0.12, "codes": ["I520"]},
                "phone": {"decision": "review", "risk_score": null, "codes": null, "correlation": "potential_match"},
                "fraud": {"decision": "accept", "risk_score": 0.01}
            },
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z"
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(review)))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/customers/cus_1/review"))
        .and(body_json(json!({"status": "verified"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("cus_1"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/customers/cus_1/refresh_review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("cus_1"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let fetched = client.customers().review("cus_1").await.unwrap();
    let review = fetched.data().unwrap();
    assert_eq!(
        review.customer_details().and_then(|c| c.id()),
        Some("cus_1")
    );

    let decision = ReviewDecisionParams::builder()
        .status(ReviewOutcome::Verified)
        .build()
        .unwrap();
    client.customers().decision("cus_1", &decision).await.unwrap();
    client.customers().refresh_review("cus_1").await.unwrap();
}

#[tokio::test]
async fn test_paykeys_get_list_review_and_cancel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paykeys/pk_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(paykey_json("pk_1"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/paykeys"))
        .and(query_param("customer_id", "cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![paykey_json("pk_1")])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/paykeys/pk_1/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "paykey_details": paykey_json("pk_1"),
            "verification_details": null
        }))))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/paykeys/pk_1/review"))
        .and(body_json(json!({"status": "rejected"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(paykey_json("pk_1"))))
        .mount(&mock_server)
        .await;

    let mut cancelled = paykey_json("pk_1");
    cancelled["status"] = json!("inactive");
    Mock::given(method("PUT"))
        .and(path("/v1/paykeys/pk_1/cancel"))
        .and(body_json(json!({"reason": "customer request"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(cancelled)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let paykeys = client.paykeys();

    let paykey = paykeys.get("pk_1").await.unwrap().into_data().unwrap();
    assert_eq!(paykey.institution_name().into_option(), Some("Chase"));
    assert_eq!(
        paykey.balance().value().and_then(|b| b.account_balance().into_option()),
        Some(125000)
    );

    let params = PaykeyListParams {
        customer_id: Some("cus_1".to_string()),
        ..Default::default()
    };
    assert_eq!(paykeys.list(&params).await.unwrap().data().len(), 1);

    let review = paykeys.review("pk_1").await.unwrap().into_data().unwrap();
    assert!(review.verification_details().is_null());

    let decision = ReviewDecisionParams::builder()
        .status(ReviewOutcome::Rejected)
        .build()
        .unwrap();
    paykeys.decision("pk_1", &decision).await.unwrap();

    let reason = StatusChangeParams::builder()
        .reason("customer request")
        .build()
        .unwrap();
    let cancelled = paykeys.cancel("pk_1", &reason).await.unwrap();
    assert_eq!(
        cancelled.data().and_then(|p| p.status()).and_then(|s| s.known()),
        Some(PaykeyStatus::Inactive)
    );
}

#[tokio::test]
async fn test_bridge_flows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/bridge/initialize"))
        .and(body_json(json!({"customer_id": "cus_1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!({"bridge_token": "brt_abc"}))),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/bridge/bank_account"))
        .and(body_json(json!({
            "customer_id": "cus_1",
            "account_number": "123456789",
            "routing_number": "021000021",
            "account_type": "checking"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(paykey_json("pk_2"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/bridge/plaid"))
        .and(body_json(json!({"customer_id": "cus_1", "plaid_token": "processor-sandbox-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(paykey_json("pk_3"))))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let bridge = client.bridge();

    let init = BridgeInitializeParams::builder()
        .customer_id("cus_1")
        .build()
        .unwrap();
    let token = bridge.initialize(&init).await.unwrap();
    assert_eq!(token.data().and_then(|t| t.bridge_token()), Some("brt_abc"));

    let bank = BridgeLinkBankAccountParams::builder()
        .customer_id("cus_1")
        .account_number("123456789")
        .routing_number("021000021")
        .account_type(AccountType::Checking)
        .build()
        .unwrap();
    let linked = bridge.link_bank_account(&bank).await.unwrap();
    assert_eq!(linked.data().and_then(|p| p.id()), Some("pk_2"));

    let plaid = BridgeLinkPlaidParams::builder()
        .customer_id("cus_1")
        .plaid_token("processor-sandbox-1")
        .build()
        .unwrap();
    let linked = bridge.link_plaid(&plaid).await.unwrap();
    assert_eq!(linked.data().and_then(|p| p.id()), Some("pk_3"));
}

#[tokio::test]
async fn test_charge_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(charge_json("ch_1", "created"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(charge_json("ch_1", "scheduled"))))
        .mount(&mock_server)
        .await;

    for (action, status) in [("hold", "on_hold"), ("release", "scheduled"), ("cancel", "cancelled")] {
        Mock::given(method("PUT"))
            .and(path(format!("/v1/charges/ch_1/{}", action)))
            .and(body_json(json!({"reason": "ops"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(charge_json("ch_1", status))))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = create_test_client(&mock_server);
    let charges = client.charges();

    let params = ChargeCreateParams::builder()
        .amount(10000)
        .currency("USD")
        .description("Invoice 42")
        .paykey("6a1f...token")
        .payment_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .consent_type(ConsentType::Internet)
        .device(Device::builder().ip_address("192.0.2.1").build().unwrap())
        .build()
        .unwrap();
    assert!(params.validate().is_ok());

    let created = charges.create(&params).await.unwrap();
    assert_eq!(created.data().and_then(|c| c.amount()), Some(10000));

    let fetched = charges.get("ch_1").await.unwrap();
    assert_eq!(
        fetched.data().and_then(|c| c.status()).and_then(|s| s.known()),
        Some(PaymentStatus::Scheduled)
    );

    let reason = StatusChangeParams::builder().reason("ops").build().unwrap();
    let held = charges.hold("ch_1", &reason).await.unwrap();
    assert_eq!(held.data().and_then(|c| c.status()).map(|s| s.as_str()), Some("on_hold"));
    charges.release("ch_1", &reason).await.unwrap();
    let cancelled = charges.cancel("ch_1", &reason).await.unwrap();
    assert_eq!(
        cancelled.data().and_then(|c| c.status()).and_then(|s| s.known()),
        Some(PaymentStatus::Cancelled)
    );
}

#[tokio::test]
async fn test_payout_create_and_hold() {
    let mock_server = MockServer::start().await;

    let mut payout = charge_json("po_1", "created");
    payout.as_object_mut().unwrap().remove("consent_type");

    Mock::given(method("POST"))
        .and(path("/v1/payouts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(payout.clone())))
        .mount(&mock_server)
        .await;

    payout["status"] = json!("on_hold");
    Mock::given(method("PUT"))
        .and(path("/v1/payouts/po_1/hold"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(payout.clone())))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/payouts/po_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(payout)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let params = PayoutCreateParams::builder()
        .amount(10000)
        .currency("USD")
        .description("Refund")
        .paykey("6a1f...token")
        .payment_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .device(Device::builder().ip_address("192.0.2.1").build().unwrap())
        .build()
        .unwrap();
    let created = client.payouts().create(&params).await.unwrap();
    assert_eq!(created.data().and_then(|p| p.id()), Some("po_1"));

    let reason = StatusChangeParams::builder().reason("review").build().unwrap();
    let held = client.payouts().hold("po_1", &reason).await.unwrap();
    assert_eq!(
        held.data().and_then(|p| p.status()).and_then(|s| s.known()),
        Some(PaymentStatus::OnHold)
    );

    let fetched = client.payouts().get("po_1").await.unwrap();
    assert!(fetched.validate().is_ok());
}

#[tokio::test]
async fn test_payments_and_funding_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/payments"))
        .and(query_param("payment_type", "charge"))
        .and(query_param("from_payment_date", "2024-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![json!({
            "id": "ch_1",
            "payment_type": "charge",
            "amount": 10000,
            "currency": "USD",
            "status": "paid",
            "paykey": "6a1f...token",
            "payment_date": "2024-06-01",
            "description": null,
            "funding_id": "fe_1",
            "created_at": "2024-06-01T09:00:00Z",
            "updated_at": "2024-06-03T09:00:00Z"
        })])))
        .mount(&mock_server)
        .await;

    let event = json!({
        "id": "fe_1",
        "amount": 10000,
        "direction": "deposit",
        "event_type": "charge_deposit",
        "payment_count": 1,
        "trace_number": "021000021234567",
        "transfer_date": "2024-06-03",
        "created_at": "2024-06-02T22:00:00Z",
        "updated_at": "2024-06-03T06:00:00Z"
    });

    Mock::given(method("GET"))
        .and(path("/v1/funding_events"))
        .and(query_param("direction", "deposit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![event.clone()])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/funding_events/fe_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(event)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let payments = client
        .payments()
        .list(&PaymentListParams {
            payment_type: Some(PaymentType::Charge.into()),
            from_payment_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..Default::default()
        })
        .await
        .unwrap();
    let summary = &payments.data()[0];
    assert_eq!(summary.funding_id().into_option(), Some("fe_1"));
    assert!(summary.description().is_null());

    let events = client
        .funding_events()
        .list(&FundingEventListParams {
            direction: Some(FundingDirection::Deposit.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(events.data().len(), 1);

    let event = client.funding_events().get("fe_1").await.unwrap();
    assert_eq!(
        event.data().and_then(|e| e.transfer_date()),
        NaiveDate::from_ymd_opt(2024, 6, 3)
    );
}

#[tokio::test]
async fn test_account_id_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .and(header("Straddle-Account-Id", "acct_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("cus_1"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StraddleClient::new(
        ClientConfig::new("sk_test_key")
            .with_base_url(mock_server.uri())
            .with_account_id("acct_42"),
    )
    .unwrap();

    assert!(client.customers().get("cus_1").await.is_ok());
}

#[tokio::test]
async fn test_path_segments_are_escaped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(customer_json("a/b"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let customer = client.customers().get("a/b").await.unwrap();
    assert_eq!(customer.data().and_then(|c| c.id()), Some("a/b"));
}

#[tokio::test]
async fn test_api_error_is_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"type": "not_found", "title": "Not Found", "detail": "Customer missing not found"}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.customers().get("missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Api { detail, .. } => {
            let detail = detail.unwrap();
            assert_eq!(detail.error_type.as_deref(), Some("not_found"));
            assert_eq!(detail.title.as_deref(), Some("Not Found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_response_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": "ch_bad",
            "amount": "one hundred"
        }))))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.charges().get("ch_bad").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unknown_enum_in_response_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_new"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(charge_json("ch_new", "settling"))),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.charges().get("ch_new").await.unwrap();

    let charge = response.data().unwrap();
    assert_eq!(charge.status().map(|s| s.as_str()), Some("settling"));
    assert_eq!(response.validate().unwrap_err().path(), "data.status");
}

#[tokio::test]
async fn test_breaker_opens_after_repeated_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paykeys/pk_1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(5)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    for _ in 0..5 {
        let err = client.paykeys().get("pk_1").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    // A clone shares the open breaker; nothing reaches the server
    let err = client.clone().paykeys().get("pk_1").await.unwrap_err();
    assert!(matches!(err, ClientError::CircuitOpen));
}

#[tokio::test]
async fn test_client_errors_do_not_open_breaker() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/paykeys/pk_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .expect(6)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    for _ in 0..6 {
        let err = client.paykeys().get("pk_gone").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
