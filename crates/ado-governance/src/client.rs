//! Top-level client wiring context, transport and sub-clients

use crate::config::ClientConfig;
use crate::context::AdoContext;
use crate::error::AdoResult;
use crate::governance::GovernanceClient;
use crate::http_client::{AdoHttpClient, HttpTransport};
use std::sync::Arc;
use tracing::{info_span, Span};

/// Entry point to the API
#[derive(Debug, Clone)]
pub struct AdoClient {
    context: Arc<AdoContext>,
    span: Span,
    governance: GovernanceClient,
}

impl AdoClient {
    /// Build a client from configuration.
    ///
    /// Credentials are read from the environment at this point.
    pub fn new(config: &ClientConfig) -> AdoResult<Self> {
        config.validate()?;

        let context = Arc::new(config.context());
        let http_client =
            AdoHttpClient::new(context.clone(), config.credentials()?, config.timeout())?;

        Ok(Self::with_transport(
            context,
            Arc::new(Self::route(config, http_client)),
        ))
    }

    /// Build a client that sends requests without credentials.
    ///
    /// Useful for previewing request URLs when no token is available.
    pub fn unauthenticated(config: &ClientConfig) -> AdoResult<Self> {
        config.validate()?;

        let context = Arc::new(config.context());
        let http_client = AdoHttpClient::anonymous(context.clone(), config.timeout())?;

        Ok(Self::with_transport(
            context,
            Arc::new(Self::route(config, http_client)),
        ))
    }

    fn route(config: &ClientConfig, http_client: AdoHttpClient) -> AdoHttpClient {
        let http_client = http_client.with_host(&config.host);
        match &config.endpoint_override {
            Some(root) => http_client.with_endpoint_override(root),
            None => http_client,
        }
    }

    /// Build a client around an existing transport
    pub fn with_transport(context: Arc<AdoContext>, transport: Arc<dyn HttpTransport>) -> Self {
        let span = info_span!("ado", tenant = %context.tenant, project = %context.project_id);
        let governance = GovernanceClient::new(context.clone(), transport, &span);

        Self {
            context,
            span,
            governance,
        }
    }

    /// Context this client addresses
    pub fn context(&self) -> &AdoContext {
        &self.context
    }

    /// Span all client activity is recorded under
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Component Governance API
    pub fn governance(&self) -> &GovernanceClient {
        &self.governance
    }
}
