//! The request/response boundary: the single place where failures become
//! problem responses.

use crate::access::AccessError;
use crate::catalog;
use crate::config::{DetailExposure, RenderConfig};
use crate::error::SpecwayError;
use crate::exception::ProblemError;
use crate::problem::{ProblemResponse, problem};
use crate::resolver::{ResolverError, ResolverErrorPolicy};

/// Render any framework failure as a problem response.
///
/// Server-side failures (5xx) are logged at `error` level with their full
/// text, whatever reaches the client.
pub fn render(err: &SpecwayError, config: &RenderConfig) -> ProblemResponse {
    let response = match err {
        SpecwayError::Problem(p) => render_problem(p, config),
        SpecwayError::Access(a) => render_access(a),
        SpecwayError::TypeValidation(e) => problem(
            catalog::BAD_REQUEST.status_code(),
            catalog::BAD_REQUEST.title,
            Some(&e.to_string()),
            None,
            None,
            None,
            None,
        ),
        SpecwayError::Resolver(_)
        | SpecwayError::InvalidSpecification(_)
        | SpecwayError::MissingMiddleware { .. } => internal_error(),
    };

    let status = response.status.as_u16();
    if response.status.is_server_error() {
        tracing::error!(status, error = %err, "request failed");
    } else {
        tracing::debug!(status, error = %err, "request rejected");
    }
    response
}

fn render_problem(p: &ProblemError, config: &RenderConfig) -> ProblemResponse {
    let mut detail = p.detail();
    if p.is_non_conforming_response() && config.server_error_detail == DetailExposure::Hide {
        tracing::error!(
            title = p.title(),
            detail = detail.unwrap_or_default(),
            "withholding non-conforming response detail from client"
        );
        detail = None;
    }
    problem(
        p.status(),
        p.title(),
        detail,
        p.type_url(),
        p.instance(),
        p.headers(),
        p.ext(),
    )
}

fn render_access(a: &AccessError) -> ProblemResponse {
    problem(
        a.status(),
        a.title(),
        Some(a.detail()),
        None,
        None,
        a.headers(),
        None,
    )
}

fn internal_error() -> ProblemResponse {
    let def = catalog::INTERNAL_SERVER_ERROR;
    problem(def.status_code(), def.title, def.detail, None, None, None, None)
}

/// Apply the resolver error policy to a failed resolution.
///
/// # Errors
/// Returns the original error when the policy is strict, or names a status
/// that [`RenderConfig::validate`] rejects, so startup aborts.
pub fn resolve_or_problem(
    err: ResolverError,
    config: &RenderConfig,
) -> Result<ProblemError, ResolverError> {
    let Some(status) = config.resolver_error.status() else {
        if let ResolverErrorPolicy::Respond(code) = config.resolver_error {
            tracing::error!(
                code,
                "invalid resolver error status configured; treating resolution failures as fatal"
            );
        }
        tracing::error!(reason = err.reason(), "operation handler could not be resolved");
        return Err(err);
    };

    tracing::warn!(
        reason = err.reason(),
        status = status.as_u16(),
        "operation handler could not be resolved; answering with a problem"
    );
    let title = status
        .canonical_reason()
        .unwrap_or(catalog::NOT_IMPLEMENTED_TITLE);
    Ok(ProblemError::resolver(status, title, err.reason()))
}
