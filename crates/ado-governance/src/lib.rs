//! Azure DevOps Component Governance client.
//!
//! Removes policy references from governed repositories:
//!
//! ```ignore
//! use ado_governance::{AdoClient, ClientConfig};
//!
//! let config = ClientConfig::load("config.toml")?;
//! let client = AdoClient::new(&config)?;
//! client.governance().remove_policy("abc123", "repo-9").await?;
//! ```
//!
//! Requests go through the [`HttpTransport`] trait; [`AdoHttpClient`] is the
//! `reqwest` implementation and tests can substitute their own.

pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod governance;
pub mod http_client;

pub use auth::Credentials;
pub use client::AdoClient;
pub use config::ClientConfig;
pub use context::AdoContext;
pub use error::{AdoError, AdoResult};
pub use governance::{GovernanceClient, GOVERNANCE_API_VERSION};
pub use http_client::{AdoHttpClient, AdoResponse, HttpTransport};
