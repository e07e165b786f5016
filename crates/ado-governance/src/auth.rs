//! Request authentication

use reqwest::RequestBuilder;
use std::fmt;

/// Credentials attached to every API request
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal access token sent over basic auth
    Basic {
        /// Account name
        username: String,
        /// Personal access token
        token: String,
    },
    /// OAuth / Entra access token
    Bearer {
        /// Access token
        token: String,
    },
}

impl Credentials {
    /// Basic credentials from a username and personal access token
    pub fn basic(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Bearer credentials from an access token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, token } => request.basic_auth(username, Some(token)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("token", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
