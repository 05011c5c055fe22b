/*
[INPUT]:  Mock HTTP responses and signed event payloads
[OUTPUT]: Test results for webhook subscription and verification
[POS]:    Integration tests - webhook lifecycle end to end
[UPDATE]: When webhook endpoints or the signing scheme change
*/

mod common;

use common::{setup_mock_server, test_client};
use hmac::{Hmac, Mac};
use river_settlement_adapter::{verify_webhook_signature, Webhook};
use sha2::Sha256;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_subscribe_returns_secret() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/accounts/acct-test/webhooks"))
        .and(body_json(serde_json::json!({"url": "https://x/cb"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"url": "https://x/cb", "secret": "abc123", "enabled": true}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let webhook = client
        .subscribe_to_webhook("https://x/cb")
        .await
        .expect("subscribe_to_webhook failed");

    let expected = Webhook {
        url: "https://x/cb".to_string(),
        secret: "abc123".to_string(),
        enabled: true,
    };
    assert_eq!(webhook, expected);
}

#[tokio::test]
async fn test_get_webhook_omits_secret() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-test/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"url": "https://x/cb", "enabled": true}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let webhook = client
        .get_subscribed_webhook()
        .await
        .expect("get_subscribed_webhook failed");
    assert_eq!(webhook.secret, "");
    assert_eq!(webhook.url, "https://x/cb");
}

#[tokio::test]
async fn test_delete_webhook_succeeds_without_body() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/acct-test/webhooks"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(client.delete_webhook().await);
}

#[tokio::test]
async fn test_subscribe_then_verify_event() {
    let server = setup_mock_server().await;
    // The server hands out a hex secret on subscription.
    let secret = "a1b2c3d4e5f60718293a4b5c6d7e8f90";
    Mock::given(method("POST"))
        .and(path("/accounts/acct-test/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"url": "https://x/cb", "secret": "{secret}", "enabled": true}}"#),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let webhook = client
        .subscribe_to_webhook("https://x/cb")
        .await
        .expect("subscribe_to_webhook failed");

    // Later, an event arrives signed with that secret.
    let event_body = r#"{"id":"evt-1","type":"WITHDRAWAL","state":"SUCCESS"}"#;
    let timestamp = "1700000300";
    let key = hex::decode(&webhook.secret).expect("secret is hex");
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(format!("{timestamp}.{event_body}").as_bytes());
    let signature = mac.finalize().into_bytes();

    verify_webhook_signature(&webhook.secret, event_body, timestamp, &signature)
        .expect("event should verify with the subscription secret");

    verify_webhook_signature(&webhook.secret, event_body, "1700000301", &signature)
        .expect_err("stale timestamp must not verify");
}
