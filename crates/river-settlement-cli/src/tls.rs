/*
[INPUT]:  TLS identity path from flag or environment
[OUTPUT]: Optional transport carrying a client certificate
[POS]:    Configuration layer - transport injection
[UPDATE]: When changing identity loading or transport options
*/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use river_settlement_adapter::ClientConfig;
use tracing::debug;

use crate::config::RLS_TLS_PATH_KEY;

/// Build a transport with a TLS client identity when a path is supplied
/// via `--tlspath` or `RLS_TLSPATH`. Returns `None` when unset so the
/// adapter constructs its default transport.
pub fn load_transport(
    tls_path: Option<&Path>,
    cfg: &ClientConfig,
) -> Result<Option<reqwest::Client>> {
    let path = match tls_path {
        Some(path) => path.to_path_buf(),
        None => match std::env::var(RLS_TLS_PATH_KEY) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => return Ok(None),
        },
    };

    let identity = load_identity(&path)?;
    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .identity(identity)
        .timeout(cfg.timeout)
        .connect_timeout(cfg.connect_timeout)
        .build()
        .context("failed to build TLS transport")?;
    Ok(Some(client))
}

/// Load a PEM identity from `{path}.cert` and `{path}.key`
fn load_identity(path: &Path) -> Result<reqwest::Identity> {
    let cert_path = format!("{}.cert", path.display());
    let key_path = format!("{}.key", path.display());
    debug!(cert = %cert_path, key = %key_path, "loading TLS identity");

    let mut pem = fs::read(&cert_path).with_context(|| format!("failed to read {cert_path}"))?;
    pem.extend(fs::read(&key_path).with_context(|| format!("failed to read {key_path}"))?);
    reqwest::Identity::from_pem(&pem).context("failed to parse TLS identity")
}
