//! Problem error family: failures that render as a full problem document.

use http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};

use crate::catalog::{self, ErrDef};

/// Which part of an outgoing response failed to match its declared contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePart {
    Any,
    Body,
    Headers,
}

/// Discriminant for [`ProblemError`], with kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemKind {
    /// Built directly through [`ProblemError::new`].
    Generic,
    BadRequest,
    UnsupportedMediaType,
    NotFound,
    Authentication,
    /// A specification operation could not be mapped to a handler.
    Resolver,
    /// The application's own response violated its declared schema. The
    /// reason is the title and the message the detail.
    NonConformingResponse { part: ResponsePart },
    /// Query or form parameters that the operation does not declare.
    ExtraParameter {
        formdata: Vec<String>,
        query: Vec<String>,
    },
}

/// A failure carrying everything needed to build a problem response.
///
/// Values are immutable once built: the `with_*` builders consume `self`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{title} (status {code})", code = .status.as_u16())]
#[must_use]
pub struct ProblemError {
    kind: ProblemKind,
    status: StatusCode,
    title: String,
    detail: Option<String>,
    type_url: Option<String>,
    instance: Option<String>,
    headers: Option<HeaderMap>,
    ext: Option<Map<String, Value>>,
}

impl Default for ProblemError {
    fn default() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }
}

fn canonical_title(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

impl ProblemError {
    /// A generic problem titled after the status' canonical reason phrase.
    pub fn new(status: StatusCode) -> Self {
        Self::from_parts(ProblemKind::Generic, status, canonical_title(status), None)
    }

    fn from_parts(
        kind: ProblemKind,
        status: StatusCode,
        title: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            kind,
            status,
            title: title.into(),
            detail,
            type_url: None,
            instance: None,
            headers: None,
            ext: None,
        }
    }

    fn from_def(kind: ProblemKind, def: ErrDef) -> Self {
        Self::from_parts(
            kind,
            def.status_code(),
            def.title,
            def.detail.map(str::to_owned),
        )
    }

    pub fn bad_request() -> Self {
        Self::from_def(ProblemKind::BadRequest, catalog::BAD_REQUEST)
    }

    pub fn unsupported_media_type() -> Self {
        Self::from_def(
            ProblemKind::UnsupportedMediaType,
            catalog::UNSUPPORTED_MEDIA_TYPE,
        )
    }

    pub fn not_found() -> Self {
        Self::from_def(ProblemKind::NotFound, catalog::NOT_FOUND)
    }

    pub fn authentication(
        status: StatusCode,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            ProblemKind::Authentication,
            status,
            title,
            Some(detail.into()),
        )
    }

    pub fn resolver(
        status: StatusCode,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::from_parts(ProblemKind::Resolver, status, title, Some(detail.into()))
    }

    /// The outgoing response violated its declared contract. `reason` becomes
    /// the title and `message` the detail.
    pub fn non_conforming_response(reason: impl Into<String>, message: Option<String>) -> Self {
        Self::non_conforming(reason.into(), message, ResponsePart::Any)
    }

    pub fn non_conforming_body(message: impl Into<String>) -> Self {
        Self::non_conforming(
            catalog::NON_CONFORMING_RESPONSE_BODY.title.to_owned(),
            Some(message.into()),
            ResponsePart::Body,
        )
    }

    pub fn non_conforming_headers(message: impl Into<String>) -> Self {
        Self::non_conforming(
            catalog::NON_CONFORMING_RESPONSE_HEADERS.title.to_owned(),
            Some(message.into()),
            ResponsePart::Headers,
        )
    }

    fn non_conforming(reason: String, message: Option<String>, part: ResponsePart) -> Self {
        Self::from_parts(
            ProblemKind::NonConformingResponse { part },
            catalog::NON_CONFORMING_RESPONSE.status_code(),
            reason,
            message,
        )
    }

    /// Unexpected query or form parameters.
    ///
    /// The detail names the query parameters when there are any, the form
    /// parameters otherwise; a later [`with_detail`](Self::with_detail) wins.
    pub fn extra_parameters(formdata: Vec<String>, query: Vec<String>) -> Self {
        let detail = if query.is_empty() {
            (!formdata.is_empty()).then(|| extra_parameter_detail("formData", &formdata))
        } else {
            Some(extra_parameter_detail("query", &query))
        };
        Self::from_parts(
            ProblemKind::ExtraParameter { formdata, query },
            catalog::BAD_REQUEST.status_code(),
            catalog::BAD_REQUEST.title,
            detail,
        )
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = Some(type_url.into());
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = Some(uri.into());
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_ext(mut self, ext: Map<String, Value>) -> Self {
        self.ext = Some(ext);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ProblemKind {
        &self.kind
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn type_url(&self) -> Option<&str> {
        self.type_url.as_deref()
    }

    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    #[must_use]
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    #[must_use]
    pub fn ext(&self) -> Option<&Map<String, Value>> {
        self.ext.as_ref()
    }

    /// Reason a non-conforming response was rejected; tracks the title.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.is_non_conforming_response().then_some(self.title.as_str())
    }

    /// Diagnostic message of a non-conforming response; tracks the detail.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if self.is_non_conforming_response() {
            self.detail()
        } else {
            None
        }
    }

    /// Whether this reports the server's own response breaking its contract.
    #[must_use]
    pub fn is_non_conforming_response(&self) -> bool {
        matches!(self.kind, ProblemKind::NonConformingResponse { .. })
    }

    #[must_use]
    pub fn extra_query(&self) -> &[String] {
        match &self.kind {
            ProblemKind::ExtraParameter { query, .. } => query,
            _ => &[],
        }
    }

    #[must_use]
    pub fn extra_formdata(&self) -> &[String] {
        match &self.kind {
            ProblemKind::ExtraParameter { formdata, .. } => formdata,
            _ => &[],
        }
    }
}

fn extra_parameter_detail(parameter_type: &str, names: &[String]) -> String {
    format!(
        "Extra {parameter_type} parameter(s) {} not in spec",
        names.join(", ")
    )
}
