/*
[INPUT]:  Raw API key
[OUTPUT]: Opaque basic-auth credential token
[POS]:    HTTP layer - request authentication material
[UPDATE]: When the API's authentication scheme changes
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Basic-auth credential derived from an RLS API key.
///
/// The API key doubles as both the username and password halves of the
/// pair, and the token is used verbatim in `Authorization: Basic {token}`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Derive the credential from a raw API key
    pub fn from_api_key(api_key: &str) -> Self {
        let pair = format!("{api_key}:{api_key}");
        Self(BASE64.encode(pair.as_bytes()))
    }

    /// The encoded token, without the `Basic ` prefix
    pub fn token(&self) -> &str {
        &self.0
    }
}

// Keeps the key material out of logs and error chains.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_round_trip() {
        let credential = Credential::from_api_key("river-key-01");
        let decoded = BASE64.decode(credential.token()).expect("valid base64");
        assert_eq!(decoded, b"river-key-01:river-key-01");
    }

    #[test]
    fn test_credential_is_deterministic() {
        let a = Credential::from_api_key("key");
        let b = Credential::from_api_key("key");
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::from_api_key("super-secret");
        let rendered = format!("{credential:?}");
        assert_eq!(rendered, "Credential(..)");
        assert!(!rendered.contains("super-secret"));
    }
}
