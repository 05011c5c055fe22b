/*
[INPUT]:  Environment variables keyed by the RLS_ENV prefix
[OUTPUT]: Populated client configuration
[POS]:    Configuration layer - environment loading and header parsing
[UPDATE]: When adding configuration options
*/

use std::collections::HashMap;
use std::env;

use anyhow::{Context, Result};
use river_settlement_adapter::ClientConfig;
use tracing::warn;

const RLS_ENV_KEY: &str = "RLS_ENV";
pub const RLS_TLS_PATH_KEY: &str = "RLS_TLSPATH";
const URL_KEY: &str = "_URL";
const ACCOUNT_ID_KEY: &str = "_RIVER_ACCOUNT_ID";
const API_SECRET_KEY: &str = "_RIVER_API_SECRET";
const WEBHOOK_SECRET_KEY: &str = "_WEBHOOK_SECRET";
const HEADERS_KEY: &str = "_HEADERS";

/// Load the client config from environment variables prefixed by the
/// value of `RLS_ENV`, e.g. `PROD_URL` when `RLS_ENV=PROD`.
pub fn load_config() -> Result<ClientConfig> {
    let prefix = env::var(RLS_ENV_KEY).unwrap_or_default();
    let base_url = require_env(&prefix, URL_KEY)?;
    let account_id = require_env(&prefix, ACCOUNT_ID_KEY)?;
    let api_key = require_env(&prefix, API_SECRET_KEY)?;

    let mut cfg = ClientConfig::new(base_url, &api_key, account_id);
    // optionals
    cfg.webhook_secret = env::var(format!("{prefix}{WEBHOOK_SECRET_KEY}"))
        .ok()
        .filter(|secret| !secret.is_empty());
    if let Ok(headers) = env::var(format!("{prefix}{HEADERS_KEY}")) {
        cfg.extra_headers = parse_extra_headers(cfg.extra_headers, &headers);
    }
    Ok(cfg)
}

fn require_env(prefix: &str, key: &str) -> Result<String> {
    let name = format!("{prefix}{key}");
    env::var(&name)
        .ok()
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{name} not set"))
}

/// Merge comma-separated `key:value` pairs into `headers`. Malformed
/// entries are logged and discarded; they never fail the request
/// pipeline.
pub fn parse_extra_headers(
    mut headers: HashMap<String, String>,
    input: &str,
) -> HashMap<String, String> {
    for entry in input.split(',') {
        if entry.is_empty() {
            continue;
        }
        let parts: Vec<&str> = entry.split(':').collect();
        match parts.as_slice() {
            [name, value] if !name.is_empty() => {
                headers.insert((*name).to_string(), (*value).to_string());
            }
            _ => warn!(entry, "ignoring malformed extra header"),
        }
    }
    headers
}
