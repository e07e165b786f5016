//! Component Governance API

use crate::context::AdoContext;
use crate::error::{AdoError, AdoResult};
use crate::http_client::HttpTransport;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument, Span};

/// API version pinned for governance requests
pub const GOVERNANCE_API_VERSION: &str = "5.1-preview.1";

/// Subdomain hosting the governance API
pub const GOVERNANCE_SUBDOMAIN: &str = "governance";

/// Client for the Component Governance API
#[derive(Clone)]
pub struct GovernanceClient {
    context: Arc<AdoContext>,
    transport: Arc<dyn HttpTransport>,
    span: Span,
}

impl GovernanceClient {
    /// Create a governance client logging under `parent`
    pub fn new(context: Arc<AdoContext>, transport: Arc<dyn HttpTransport>, parent: &Span) -> Self {
        let span = info_span!(parent: parent, "governance", tenant = %context.tenant);
        Self {
            context,
            transport,
            span,
        }
    }

    /// Context this client addresses
    pub fn context(&self) -> &AdoContext {
        &self.context
    }

    /// URL of a policy reference on a governed repository.
    ///
    /// Identifiers are interpolated verbatim and must already be URL-safe.
    pub fn policy_reference_url(&self, policy_id: &str, governed_repository_id: &str) -> String {
        let mut url = self
            .transport
            .api_endpoint(false, Some(GOVERNANCE_SUBDOMAIN));
        url.push_str("/ComponentGovernance/GovernedRepositories");
        url.push_str(&format!("/{}/policyreferences", governed_repository_id));
        url.push_str(&format!(
            "/{}?api-version={}",
            policy_id, GOVERNANCE_API_VERSION
        ));
        url
    }

    /// Remove a policy from a governed repository.
    ///
    /// `governed_repository_id` is the governance-side identifier, which is not
    /// necessarily the same as the native repository id. Any non-success
    /// response, including 404 for an already removed reference, is returned
    /// as [`AdoError::Http`]. The request is never retried.
    pub async fn remove_policy(
        &self,
        policy_id: &str,
        governed_repository_id: &str,
    ) -> AdoResult<()> {
        let request_url = self.policy_reference_url(policy_id, governed_repository_id);

        async {
            let response = self.transport.delete(&request_url).await?;

            if !response.ok() {
                warn!(
                    policy_id,
                    governed_repository_id,
                    status = %response.status,
                    "Policy removal rejected"
                );
                return Err(AdoError::http(
                    format!(
                        "Failed to remove policy {} from {}",
                        policy_id, governed_repository_id
                    ),
                    response,
                ));
            }

            info!(policy_id, governed_repository_id, "Removed policy");
            Ok(())
        }
        .instrument(self.span.clone())
        .await
    }
}

impl std::fmt::Debug for GovernanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GovernanceClient")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
