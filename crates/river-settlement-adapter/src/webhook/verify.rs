/*
[INPUT]:  Webhook secret, raw event body, timestamp, signature bytes
[OUTPUT]: Verification result
[POS]:    Webhook layer - signature verification
[UPDATE]: When the signing scheme changes
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{Result, RiverError};

type HmacSha256 = Hmac<Sha256>;

/// Verify the authenticity of an inbound webhook event.
///
/// The secret is the hex string returned on webhook subscription. The
/// signed payload is `"{timestamp}.{event_body}"`, and `signature` is
/// compared against its HMAC-SHA256 digest in constant time. The raw
/// signature bytes are compared as delivered; any transport encoding of
/// the signature header must be undone by the caller first.
///
/// Pure and stateless; safe to call from any number of tasks at once.
pub fn verify_webhook_signature(
    secret: &str,
    event_body: &str,
    timestamp: &str,
    signature: &[u8],
) -> Result<()> {
    let key = hex::decode(secret)?;
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(format!("{timestamp}.{event_body}").as_bytes());
    mac.verify_slice(signature)
        .map_err(|_| RiverError::SignatureMismatch)
}
