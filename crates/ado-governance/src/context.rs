//! Account addressing shared by every sub-client

use serde::{Deserialize, Serialize};

/// Organisation and project a client talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoContext {
    /// Organisation name, the first path segment of every API URL
    pub tenant: String,
    /// Project identifier (name or GUID)
    pub project_id: String,
}

impl AdoContext {
    /// Create a new context
    pub fn new(tenant: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            tenant: tenant.into(),
            project_id: project_id.into(),
        }
    }
}
