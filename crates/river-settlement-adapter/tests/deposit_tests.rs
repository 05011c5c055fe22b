/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for deposit endpoints
[POS]:    Integration tests - deposit intents, queries, and pagination
[UPDATE]: When deposit endpoints or pagination change
*/

mod common;

use common::{setup_mock_server, test_client};
use river_settlement_adapter::{Deposit, DepositDetail, Invoice};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

const INVOICE_JSON: &str = r#"{
    "id": "inv-1",
    "network": "LN",
    "timestamp": 1700000000,
    "invoice": "lnbc210n1invoice"
}"#;

fn deposit_json(id: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "deposit_intent": {INVOICE_JSON},
            "amount": 21000,
            "deposit_details": {{"network": "LN", "proof": "preimage"}},
            "state": "settled",
            "timestamp": 1700000100
        }}"#
    )
}

fn expected_deposit(id: &str) -> Deposit {
    Deposit {
        id: id.to_string(),
        invoice: Invoice {
            id: "inv-1".to_string(),
            network: "LN".to_string(),
            timestamp: 1_700_000_000,
            invoice: "lnbc210n1invoice".to_string(),
        },
        amount: 21_000,
        detail: DepositDetail {
            network: "LN".to_string(),
            proof: "preimage".to_string(),
        },
        state: "settled".to_string(),
        timestamp: 1_700_000_100,
    }
}

#[tokio::test]
async fn test_new_invoice() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/accounts/acct-test/deposit_intents"))
        .and(body_json(serde_json::json!({
            "amount": 21000,
            "label": "order-42",
            "network": "LN",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(INVOICE_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let invoice = client
        .new_invoice(21_000, "order-42", "LN")
        .await
        .expect("new_invoice failed");
    assert_eq!(invoice.id, "inv-1");
    assert_eq!(invoice.invoice, "lnbc210n1invoice");
}

#[tokio::test]
async fn test_new_invoice_defaults_network() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/accounts/acct-test/deposit_intents"))
        .and(body_json(serde_json::json!({
            "amount": 1000,
            "label": "",
            "network": "LN",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(INVOICE_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .new_invoice(1_000, "", "")
        .await
        .expect("new_invoice failed");
}

#[tokio::test]
async fn test_get_deposit() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/deposits/dep-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(deposit_json("dep-1"), "application/json"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let deposit = client.get_deposit("dep-1").await.expect("get_deposit failed");
    assert_eq!(deposit, Some(expected_deposit("dep-1")));
}

#[tokio::test]
async fn test_get_deposit_not_found_is_none() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/deposits/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("deposit not found"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let deposit = client.get_deposit("missing").await.expect("get_deposit failed");
    assert_eq!(deposit, None);
}

#[tokio::test]
async fn test_get_deposits_default_pagination() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/deposits"))
        .and(query_param("limit", "25"))
        .and(query_param_is_missing("next_timestamp"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"deposits": [{}], "next_timestamp": 1699999000}}"#,
                deposit_json("dep-1")
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client.get_deposits(None, None).await.expect("get_deposits failed");
    assert_eq!(page.count(), 1);
    assert_eq!(page.deposits[0], expected_deposit("dep-1"));
    assert_eq!(page.next_timestamp, 1_699_999_000);
}

#[tokio::test]
async fn test_get_deposits_zero_cursor_is_omitted() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/deposits"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("next_timestamp"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"deposits": [], "next_timestamp": 0}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .get_deposits(Some(10), Some(0))
        .await
        .expect("get_deposits failed");
    assert_eq!(page.count(), 0);
}

#[tokio::test]
async fn test_get_deposits_cursor_passed_verbatim() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/deposits"))
        .and(query_param("limit", "25"))
        .and(query_param("next_timestamp", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"deposits": [], "next_timestamp": 0}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .get_deposits(None, Some(1_700_000_000))
        .await
        .expect("get_deposits failed");
    assert_eq!(page.next_timestamp, 0);
}
