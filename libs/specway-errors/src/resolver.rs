//! Failures to map a specification operation to a handler.

use http::StatusCode;
use serde::{Deserialize, Serialize};

const UNKNOWN_REASON: &str = "Unknown reason";

/// Snapshot of the failure that made resolution give up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureContext {
    /// Rust type name of the originating error, as seen at the capture site.
    pub type_name: String,
    pub message: String,
    /// Rendered `source()` chain, outermost cause first.
    pub chain: Vec<String>,
}

impl FailureContext {
    /// Snapshot `err` and its `source()` chain.
    ///
    /// The type name is the static type of `err`: a `&dyn Error` records
    /// `dyn core::error::Error`. Use [`with_type_name`](Self::with_type_name)
    /// when the concrete type is only known to the caller.
    #[must_use]
    pub fn capture<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut chain = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            chain.push(cause.to_string());
            current = cause.source();
        }
        Self {
            type_name: std::any::type_name::<E>().to_owned(),
            message: err.to_string(),
            chain,
        }
    }

    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("resolver error: {reason}")]
#[must_use]
pub struct ResolverError {
    reason: String,
    context: Option<FailureContext>,
}

impl Default for ResolverError {
    fn default() -> Self {
        Self::new(UNKNOWN_REASON)
    }
}

impl ResolverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            context: None,
        }
    }

    /// Resolution failed because `err` was raised while importing or
    /// looking up the handler.
    pub fn caused_by<E>(reason: impl Into<String>, err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(reason).with_context(FailureContext::capture(err))
    }

    pub fn with_context(mut self, context: FailureContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn context(&self) -> Option<&FailureContext> {
        self.context.as_ref()
    }
}

/// What to do with operations whose handler cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverErrorPolicy {
    /// Fail at startup.
    #[default]
    Strict,
    /// Register the operation anyway and answer it with this status.
    Respond(u16),
}

impl ResolverErrorPolicy {
    /// Status to answer with, `None` when resolution failures are fatal or
    /// the configured code is not a final response status (200..=599).
    #[must_use]
    pub fn status(self) -> Option<StatusCode> {
        match self {
            Self::Strict => None,
            Self::Respond(code) => StatusCode::from_u16(code)
                .ok()
                .filter(|s| !s.is_informational() && (100..600).contains(&code)),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("module 'api.users' has no attribute 'list_users'")]
    struct LookupFailed {
        #[source]
        source: std::io::Error,
    }

    #[test]
    fn default_reason() {
        let err = ResolverError::default();
        assert_eq!(err.reason(), "Unknown reason");
        assert!(err.context().is_none());
        assert_eq!(err.to_string(), "resolver error: Unknown reason");
    }

    #[test]
    fn caused_by_captures_chain() {
        let cause = LookupFailed {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "users.rs missing"),
        };
        let err = ResolverError::caused_by("cannot resolve listUsers", &cause);

        let ctx = err.context().unwrap();
        assert!(ctx.type_name.ends_with("LookupFailed"));
        assert_eq!(
            ctx.message,
            "module 'api.users' has no attribute 'list_users'"
        );
        assert_eq!(ctx.chain, vec!["users.rs missing".to_owned()]);
        assert_eq!(err.reason(), "cannot resolve listUsers");
    }

    #[test]
    fn capture_through_trait_object_accepts_caller_type_name() {
        let boxed: Box<dyn std::error::Error> =
            Box::new(std::io::Error::other("handler module failed to load"));
        let ctx = FailureContext::capture(boxed.as_ref());
        assert!(ctx.type_name.contains("dyn"));

        let ctx = ctx.with_type_name("std::io::Error");
        assert_eq!(ctx.type_name, "std::io::Error");
        assert_eq!(ctx.message, "handler module failed to load");
    }

    #[test]
    fn policy_status() {
        assert_eq!(ResolverErrorPolicy::Strict.status(), None);
        assert_eq!(
            ResolverErrorPolicy::Respond(501).status(),
            Some(StatusCode::NOT_IMPLEMENTED)
        );
        for code in [7, 101, 600, 999] {
            assert_eq!(ResolverErrorPolicy::Respond(code).status(), None);
        }
    }

    #[test]
    fn policy_deserializes() {
        let strict: ResolverErrorPolicy = serde_json::from_str(r#""strict""#).unwrap();
        assert_eq!(strict, ResolverErrorPolicy::Strict);
        let respond: ResolverErrorPolicy = serde_json::from_str(r#"{"respond":501}"#).unwrap();
        assert_eq!(respond, ResolverErrorPolicy::Respond(501));
    }
}
