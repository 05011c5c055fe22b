/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of a deposit-intent creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoiceRequest {
    pub amount: i64,
    pub label: String,
    pub network: String,
}

/// Body of an invoice decode call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeInvoiceRequest {
    pub destination: String,
}

/// Body of a fee estimate call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFeeRequest {
    pub destination: String,
    pub amount: i64,
}

/// Body of a webhook subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeWebhookRequest {
    pub url: String,
}
