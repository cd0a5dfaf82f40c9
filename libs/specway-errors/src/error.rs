//! Root error type that every framework failure converts into.

use http::StatusCode;

use crate::access::AccessError;
use crate::exception::ProblemError;
use crate::resolver::ResolverError;
use crate::validation::{InvalidSpecification, TypeValidationError, ValidationFailure};

/// Every failure the framework raises.
///
/// Detection sites return their specific error and `?` lifts it into this
/// type; [`crate::boundary::render`] is the only place that turns it into a
/// response.
#[derive(Debug, thiserror::Error)]
pub enum SpecwayError {
    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error(transparent)]
    InvalidSpecification(#[from] InvalidSpecification),

    #[error("middleware '{middleware}' is required but missing from the stack")]
    MissingMiddleware { middleware: String },

    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),
}

pub type SpecwayResult<T = ()> = Result<T, SpecwayError>;

impl From<jsonschema::ValidationError<'_>> for SpecwayError {
    fn from(err: jsonschema::ValidationError<'_>) -> Self {
        Self::InvalidSpecification(err.into())
    }
}

impl SpecwayError {
    #[must_use]
    pub fn missing_middleware(middleware: impl Into<String>) -> Self {
        Self::MissingMiddleware {
            middleware: middleware.into(),
        }
    }

    /// Status the error is answered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Problem(p) => p.status(),
            Self::Access(a) => a.status(),
            Self::TypeValidation(_) => StatusCode::BAD_REQUEST,
            Self::Resolver(_) | Self::InvalidSpecification(_) | Self::MissingMiddleware { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The validation view of this error, for code that handles schema and
    /// coercion failures uniformly.
    #[must_use]
    pub fn as_validation_failure(&self) -> Option<&dyn ValidationFailure> {
        match self {
            Self::InvalidSpecification(e) => Some(e as &dyn ValidationFailure),
            Self::TypeValidation(e) => Some(e as &dyn ValidationFailure),
            _ => None,
        }
    }
}

/// Coercion mismatches surface to clients as bad requests.
impl From<TypeValidationError> for ProblemError {
    fn from(err: TypeValidationError) -> Self {
        ProblemError::bad_request().with_detail(err.to_string())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn parse_limit(raw: &str) -> SpecwayResult<u32> {
        raw.parse()
            .map_err(|_| TypeValidationError::new("integer", "query", "limit").into())
    }

    #[test]
    fn question_mark_lifts_specific_errors() {
        fn handler() -> SpecwayResult {
            let denied: Result<(), AccessError> = Err(AccessError::forbidden());
            denied?;
            Ok(())
        }
        let err = handler().unwrap_err();
        assert!(matches!(err, SpecwayError::Access(_)));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn status_per_variant() {
        assert_eq!(
            SpecwayError::from(ProblemError::not_found()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            parse_limit("ten").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SpecwayError::from(ResolverError::default()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SpecwayError::missing_middleware("security").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_view() {
        let err = parse_limit("x").unwrap_err();
        let failure = err.as_validation_failure().unwrap();
        assert_eq!(failure.instance_path(), Some("limit"));

        let spec = SpecwayError::from(InvalidSpecification::new("bad"));
        assert_eq!(spec.as_validation_failure().unwrap().message(), "bad");

        assert!(SpecwayError::from(AccessError::unauthorized())
            .as_validation_failure()
            .is_none());
    }

    #[test]
    fn type_validation_converts_to_bad_request_problem() {
        let problem: ProblemError = TypeValidationError::new("boolean", "header", "x-dry-run").into();
        assert_eq!(problem.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            problem.detail(),
            Some("Wrong type, expected 'boolean' for header parameter 'x-dry-run'")
        );
    }

    #[test]
    fn missing_middleware_message() {
        let err = SpecwayError::missing_middleware("RoutingMiddleware");
        assert_eq!(
            err.to_string(),
            "middleware 'RoutingMiddleware' is required but missing from the stack"
        );
    }
}
