/*
[INPUT]:  Inbound webhook event payloads
[OUTPUT]: Typed Rust event structs with serialization support
[POS]:    Webhook layer - event schema
[UPDATE]: When the event schema gains types or states
*/

use serde::{Deserialize, Serialize};

/// Which resource an event reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookEventType {
    Deposit,
    Withdrawal,
}

/// Outcome carried by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookEventState {
    Success,
    Pending,
    Fail,
}

/// An event delivered to the subscribed callback URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    pub state: WebhookEventState,
}

/// Signature metadata delivered alongside an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub timestamp: String,
    pub signature: String,
}

impl WebhookHeader {
    /// Verify `event_body` against this header using the account's
    /// webhook secret. The signature string's raw bytes are compared to
    /// the digest, matching what the server signs.
    pub fn verify(&self, secret: &str, event_body: &str) -> crate::http::Result<()> {
        super::verify_webhook_signature(
            secret,
            event_body,
            &self.timestamp,
            self.signature.as_bytes(),
        )
    }
}
