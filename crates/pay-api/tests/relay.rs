//! End-to-end: storefront request → router → PayPal gateway → mock PayPal.

use axum::http::StatusCode;
use axum_test::TestServer;
use pay_api::{create_router, AppConfig, AppState};
use pay_paypal::{PayPalConfig, PayPalOrderGateway};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "A21AAFEpH4PsADK7qSS7pSRsgzfENtu";

async fn paypal() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .mount(&server)
        .await;
    server
}

fn relay(config: PayPalConfig) -> TestServer {
    let gateway = PayPalOrderGateway::new(config).unwrap();
    let state = AppState::new(AppConfig::default(), Arc::new(gateway));
    TestServer::new(create_router(state)).unwrap()
}

fn relay_for(paypal: &MockServer) -> TestServer {
    relay(PayPalConfig::new("client", "secret").with_api_base_url(paypal.uri()))
}

fn cart() -> serde_json::Value {
    json!({
        "cart": [
            {
                "id": "sku-1",
                "quantity": "2",
                "unit_amount": { "currency_code": "USD", "value": "100.00" }
            },
            {
                "id": "sku-2",
                "quantity": "1",
                "unit_amount": { "currency_code": "USD", "value": "7.00" }
            }
        ]
    })
}

#[tokio::test]
async fn create_order_round_trip() {
    let paypal = paypal().await;
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(body_partial_json(json!({
            "purchase_units": [{ "amount": { "currency_code": "USD", "value": "100.00" } }]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": "5O190127TN364715T" })),
        )
        .expect(1)
        .mount(&paypal)
        .await;

    let response = relay_for(&paypal).post("/api/orders").json(&cart()).await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": "5O190127TN364715T" }));
}

#[tokio::test]
async fn non_json_upstream_body_becomes_generic_error() {
    let paypal = paypal().await;
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&paypal)
        .await;

    let response = relay_for(&paypal).post("/orders").json(&cart()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to create order." }));
}

#[tokio::test]
async fn provider_rejection_is_relayed_verbatim() {
    let paypal = paypal().await;
    let body = json!({
        "name": "UNPROCESSABLE_ENTITY",
        "details": [{ "issue": "ORDER_NOT_APPROVED" }]
    });
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/5O190127TN364715T/capture"))
        .respond_with(ResponseTemplate::new(422).set_body_json(body.clone()))
        .expect(1)
        .mount(&paypal)
        .await;

    let response = relay_for(&paypal)
        .post("/orders/5O190127TN364715T/capture")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&body);
}

#[tokio::test]
async fn encoded_order_id_cannot_reach_other_endpoints() {
    let paypal = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "status": "REFUNDED" })),
        )
        .expect(0)
        .mount(&paypal)
        .await;

    let server = relay_for(&paypal);

    for order_path in [
        "/orders/..%2F..%2Fpayments%2Fcaptures%2FCAP1%2Frefund%3F/capture",
        "/api/orders/..%2F..%2Fpayments%2Fcaptures%2FCAP1%2Frefund%3F/capture",
        "/orders/ORDER-1%3Fx%3D1/capture",
        "/orders/ORDER-1%23frag/capture",
        "/orders/..%2E/capture",
    ] {
        let response = server.post(order_path).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Failed to capture order." }));
    }

    // Dot segments never reach the capture handler
    let response = server.post("/orders/../capture").await;
    assert_ne!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn missing_credentials_never_reach_paypal() {
    let paypal = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&paypal)
        .await;

    let config = PayPalConfig::from_lookup(|key| match key {
        "PAYPAL_API_BASE_URL" => Some(paypal.uri()),
        _ => None,
    })
    .unwrap();
    let server = relay(config);

    let create = server.post("/orders").json(&cart()).await;
    create.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    create.assert_json(&json!({ "error": "Failed to create order." }));

    let capture = server.post("/orders/ORDER-1/capture").await;
    capture.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    capture.assert_json(&json!({ "error": "Failed to capture order." }));
}

#[tokio::test]
async fn health_is_independent_of_paypal() {
    // Points at a closed port; /test must not care
    let config = PayPalConfig::new("client", "secret").with_api_base_url("http://127.0.0.1:9");
    let server = relay(config);

    let response = server.get("/test").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "running" }));
}
