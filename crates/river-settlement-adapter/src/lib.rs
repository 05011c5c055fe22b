/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public RLS adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod webhook;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credential,
    Result,
    RiverClient,
    RiverError,
};

// Re-export all types
pub use types::*;

// Re-export webhook event types and the signature verifier
pub use webhook::{
    WebhookEvent,
    WebhookEventState,
    WebhookEventType,
    WebhookHeader,
    verify_webhook_signature,
};
