/*
[INPUT]:  Inbound webhook events and signature material
[OUTPUT]: Typed events and signature verification
[POS]:    Webhook layer - module wiring
[UPDATE]: When event schema or verification changes
*/

pub mod events;
pub mod verify;

pub use events::{WebhookEvent, WebhookEventState, WebhookEventType, WebhookHeader};
pub use verify::verify_webhook_signature;
