/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for river-settlement-adapter tests

use river_settlement_adapter::{ClientConfig, Credential, RiverClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_ACCOUNT_ID: &str = "acct-test";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointed at the mock server
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri(), TEST_API_KEY, TEST_ACCOUNT_ID)
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> RiverClient {
    RiverClient::new(test_config(server)).expect("client init")
}

/// The Authorization header value every request must carry
#[allow(dead_code)]
pub fn expected_auth_header() -> String {
    format!("Basic {}", Credential::from_api_key(TEST_API_KEY).token())
}
