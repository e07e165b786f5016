//! HTTP transport and endpoint construction

use crate::auth::Credentials;
use crate::context::AdoContext;
use crate::error::AdoResult;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API host
pub const DEFAULT_HOST: &str = "dev.azure.com";

/// Response to an API request.
///
/// Holds everything callers may want to inspect after a failure; the body is
/// kept as raw text and never parsed by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Final request URL
    pub url: String,
    /// Raw response body
    pub body: String,
}

impl AdoResponse {
    /// Create a response
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }
}

/// Builds API URLs and sends requests on behalf of the sub-clients
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Base URL for the API, without a trailing slash
    fn api_endpoint(&self, is_default_collection: bool, subdomain: Option<&str>) -> String;

    /// Send a DELETE with no body.
    ///
    /// Any status is returned as a response; only failures to obtain one are
    /// errors.
    async fn delete(&self, url: &str) -> AdoResult<AdoResponse>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct AdoHttpClient {
    client: Client,
    context: Arc<AdoContext>,
    credentials: Option<Credentials>,
    host: String,
    endpoint_override: Option<String>,
}

impl AdoHttpClient {
    /// Create a new HTTP client
    pub fn new(
        context: Arc<AdoContext>,
        credentials: Credentials,
        timeout: Duration,
    ) -> AdoResult<Self> {
        Self::build(context, Some(credentials), timeout)
    }

    /// Create a client that sends no credentials
    pub fn anonymous(context: Arc<AdoContext>, timeout: Duration) -> AdoResult<Self> {
        Self::build(context, None, timeout)
    }

    fn build(
        context: Arc<AdoContext>,
        credentials: Option<Credentials>,
        timeout: Duration,
    ) -> AdoResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ado-governance/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            context,
            credentials,
            host: DEFAULT_HOST.to_string(),
            endpoint_override: None,
        })
    }

    /// Use a host other than `dev.azure.com`
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Send every request to a fixed root instead of `https://{subdomain.}{host}`
    pub fn with_endpoint_override(mut self, root: impl Into<String>) -> Self {
        self.endpoint_override = Some(root.into().trim_end_matches('/').to_string());
        self
    }

    /// Context this client addresses
    pub fn context(&self) -> &AdoContext {
        &self.context
    }
}

#[async_trait]
impl HttpTransport for AdoHttpClient {
    fn api_endpoint(&self, is_default_collection: bool, subdomain: Option<&str>) -> String {
        let root = match (&self.endpoint_override, subdomain) {
            (Some(root), _) => root.clone(),
            (None, Some(subdomain)) => format!("https://{}.{}", subdomain, self.host),
            (None, None) => format!("https://{}", self.host),
        };

        let mut url = format!("{}/{}/", root, self.context.tenant);
        if is_default_collection {
            url.push_str("DefaultCollection/");
        }
        url.push_str(&self.context.project_id);
        url.push_str("/_apis");
        url
    }

    async fn delete(&self, url: &str) -> AdoResult<AdoResponse> {
        debug!(method = "DELETE", url, "Sending request");

        let mut request = self.client.delete(url);
        if let Some(credentials) = &self.credentials {
            request = credentials.apply(request);
        }
        let response = request.send().await?;

        let status = response.status();
        let final_url = response.url().to_string();
        // The status decides the outcome; a body cut short is kept empty.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    method = "DELETE",
                    url,
                    %status,
                    error = %e,
                    "Failed to read response body"
                );
                String::new()
            }
        };

        debug!(method = "DELETE", url, %status, "Received response");
        Ok(AdoResponse::new(status, final_url, body))
    }
}
