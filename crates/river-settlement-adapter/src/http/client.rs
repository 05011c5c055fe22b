/*
[INPUT]:  HTTP configuration (base URL, account id, credentials, headers)
[OUTPUT]: Configured client plus request dispatch and response handling
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing envelope behavior
*/

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::http::{Credential, Result, RiverError};

/// Page size used when a list caller does not supply one
pub const DEFAULT_PAGE_LIMIT: i64 = 25;

const JSON_CONTENT_TYPE: &str = "application/json; charset-utf-8";

/// Configuration for a [`RiverClient`].
///
/// Immutable once the client is constructed; resource operations never
/// mutate it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://api.river.com/v1`
    pub base_url: String,
    /// Account whose resources the client operates on
    pub account_id: String,
    /// Basic-auth credential derived from the API key
    pub credential: Credential,
    /// Secret used to verify inbound webhook events, when subscribed
    pub webhook_secret: Option<String>,
    /// Headers applied after the defaults; same-name entries override them
    pub extra_headers: HashMap<String, String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default timeouts and no extra headers
    pub fn new(
        base_url: impl Into<String>,
        api_key: &str,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            account_id: account_id.into(),
            credential: Credential::from_api_key(api_key),
            webhook_secret: None,
            extra_headers: HashMap::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the RLS API
#[derive(Debug)]
pub struct RiverClient {
    http_client: Client,
    base_url: String,
    headers: HeaderMap,
    cfg: ClientConfig,
    cancel: CancellationToken,
}

impl RiverClient {
    /// Create a new client with its own transport
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(cfg.timeout)
            .connect_timeout(cfg.connect_timeout)
            .build()?;
        Self::with_http_client(cfg, http_client)
    }

    /// Create a client around a pre-configured transport, e.g. one
    /// carrying a TLS client identity
    pub fn with_http_client(cfg: ClientConfig, http_client: Client) -> Result<Self> {
        let base_url = cfg.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;
        let headers = build_headers(&cfg)?;
        Ok(Self {
            http_client,
            base_url,
            headers,
            cfg,
            cancel: CancellationToken::new(),
        })
    }

    /// Attach a caller-supplied cancellation token.
    ///
    /// When the token has fired, in-flight calls report
    /// [`RiverError::Cancelled`] rather than a transport error.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_id(&self) -> &str {
        &self.cfg.account_id
    }

    /// Webhook secret from the config, if one was provided
    pub fn webhook_secret(&self) -> Option<&str> {
        self.cfg.webhook_secret.as_deref()
    }

    /// Build a URL for an account-scoped resource.
    ///
    /// An empty path addresses the account itself.
    pub(crate) fn account_url(&self, path: &str) -> Result<Url> {
        let url = if path.is_empty() {
            format!("{}/accounts/{}", self.base_url, self.cfg.account_id)
        } else {
            format!("{}/accounts/{}/{}", self.base_url, self.cfg.account_id, path)
        };
        Ok(Url::parse(&url)?)
    }

    /// Build a URL for a global (non account-scoped) resource
    pub(crate) fn global_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    /// Build a request carrying the default and extra headers
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending RLS request");
        self.http_client
            .request(method, url)
            .headers(self.headers.clone())
    }

    /// Attach a JSON body; serialization failure is a build error, not a
    /// transport error
    pub(crate) fn json_body<T: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &T,
    ) -> Result<RequestBuilder> {
        let bytes = serde_json::to_vec(body)
            .map_err(|err| RiverError::Build(format!("failed to encode request body: {err}")))?;
        Ok(builder.body(bytes))
    }

    /// Execute a request and decode the success body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.dispatch(builder).await?;
        let status = response.status();
        if !is_success(status) {
            return Err(self.read_api_error(status, response).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| RiverError::Decode { body, source })
    }

    /// Execute a request whose success carries no body
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.dispatch(builder).await?;
        let status = response.status();
        if !is_success(status) {
            return Err(self.read_api_error(status, response).await);
        }
        Ok(())
    }

    /// Single-attempt dispatch. Cancellation takes precedence over a
    /// transport failure observed at the same time.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        if self.cancel.is_cancelled() {
            return Err(RiverError::Cancelled);
        }
        match builder.send().await {
            Ok(response) => Ok(response),
            Err(_) if self.cancel.is_cancelled() => Err(RiverError::Cancelled),
            Err(err) => Err(err.into()),
        }
    }

    /// Read a failure body into an API error. The body is kept as opaque
    /// diagnostic text, never parsed as JSON.
    async fn read_api_error(&self, status: StatusCode, response: Response) -> RiverError {
        let detail = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => "response body is empty".to_string(),
        };
        RiverError::api_error(status, detail)
    }
}

/// Success is anything below 400, matching the API's use of redirects
fn is_success(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Default headers plus the config's extra headers; extras applied last so
/// a same-name entry overrides the default.
fn build_headers(cfg: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    let mut auth = HeaderValue::from_str(&format!("Basic {}", cfg.credential.token()))
        .map_err(|err| RiverError::Config(format!("invalid credential header: {err}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    for (name, value) in &cfg.extra_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| RiverError::Config(format!("invalid header name {name:?}: {err}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| RiverError::Config(format!("invalid header value: {err}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Pagination query assembly: `limit` is always present, the cursor only
/// when the caller supplies a non-zero value.
pub(crate) fn page_query(
    limit: Option<i64>,
    next_timestamp: Option<i64>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![("limit", limit.unwrap_or(DEFAULT_PAGE_LIMIT).to_string())];
    match next_timestamp {
        Some(ts) if ts != 0 => query.push(("next_timestamp", ts.to_string())),
        _ => {}
    }
    query
}
