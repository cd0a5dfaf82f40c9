//! Access-control failures: missing credentials (401) and insufficient
//! permissions (403), including the OAuth specific variants.

use http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::catalog;

/// What went wrong, with the data needed to explain it.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessKind {
    Unauthorized,
    /// The bearer token was rejected.
    OAuth,
    /// The token-introspection endpoint answered with something unusable.
    OAuthResponse { token_response: Value },
    Forbidden,
    /// The token lacks scopes the operation requires.
    OAuthScope {
        token_scopes: Vec<String>,
        required_scopes: Vec<String>,
    },
}

impl AccessKind {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::OAuth | Self::OAuthResponse { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden | Self::OAuthScope { .. } => StatusCode::FORBIDDEN,
        }
    }

    fn default_detail(&self) -> &'static str {
        let def = if self.status() == StatusCode::UNAUTHORIZED {
            catalog::UNAUTHORIZED
        } else {
            catalog::FORBIDDEN
        };
        def.detail.unwrap_or(def.title)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{detail}")]
#[must_use]
pub struct AccessError {
    kind: AccessKind,
    detail: String,
    headers: Option<HeaderMap>,
}

impl AccessError {
    /// An access error of the given kind with that kind's default detail.
    pub fn new(kind: AccessKind) -> Self {
        let detail = kind.default_detail().to_owned();
        Self {
            kind,
            detail,
            headers: None,
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(AccessKind::Unauthorized)
    }

    pub fn oauth() -> Self {
        Self::new(AccessKind::OAuth)
    }

    pub fn oauth_response(token_response: Value) -> Self {
        Self::new(AccessKind::OAuthResponse { token_response })
    }

    pub fn forbidden() -> Self {
        Self::new(AccessKind::Forbidden)
    }

    pub fn oauth_scope(token_scopes: Vec<String>, required_scopes: Vec<String>) -> Self {
        Self::new(AccessKind::OAuthScope {
            token_scopes,
            required_scopes,
        })
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &AccessKind {
        &self.kind
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    /// Canonical reason phrase of the status.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.status() == StatusCode::UNAUTHORIZED {
            catalog::UNAUTHORIZED.title
        } else {
            catalog::FORBIDDEN.title
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    #[must_use]
    pub fn token_response(&self) -> Option<&Value> {
        match &self.kind {
            AccessKind::OAuthResponse { token_response } => Some(token_response),
            _ => None,
        }
    }

    #[must_use]
    pub fn token_scopes(&self) -> Option<&[String]> {
        match &self.kind {
            AccessKind::OAuthScope { token_scopes, .. } => Some(token_scopes),
            _ => None,
        }
    }

    #[must_use]
    pub fn required_scopes(&self) -> Option<&[String]> {
        match &self.kind {
            AccessKind::OAuthScope {
                required_scopes, ..
            } => Some(required_scopes),
            _ => None,
        }
    }

    /// Required scopes the token was not granted, in required order.
    #[must_use]
    pub fn missing_scopes(&self) -> Vec<&str> {
        match &self.kind {
            AccessKind::OAuthScope {
                token_scopes,
                required_scopes,
            } => required_scopes
                .iter()
                .filter(|scope| !token_scopes.contains(*scope))
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}
