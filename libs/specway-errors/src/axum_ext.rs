//! Axum integration: problem responses and framework errors are directly
//! returnable from handlers.

use axum::http::{HeaderValue, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::access::AccessError;
use crate::boundary::render;
use crate::config::RenderConfig;
use crate::error::SpecwayError;
use crate::exception::ProblemError;
use crate::problem::{APPLICATION_PROBLEM_JSON, ProblemResponse};

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let ProblemResponse {
            status,
            headers,
            body,
        } = self;
        let mut resp = axum::Json(body).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().extend(headers);
        resp.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// Renders with the default [`RenderConfig`]; call [`render`] directly to
/// apply a different policy.
impl IntoResponse for SpecwayError {
    fn into_response(self) -> Response {
        render(&self, &RenderConfig::default()).into_response()
    }
}

impl IntoResponse for ProblemError {
    fn into_response(self) -> Response {
        SpecwayError::from(self).into_response()
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        SpecwayError::from(self).into_response()
    }
}
