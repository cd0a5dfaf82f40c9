//! Static defaults for every error kind the crate knows about.

use http::StatusCode;

/// Static error definition: the status, title and detail a kind starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

impl ErrDef {
    /// The status as a `StatusCode`, `INTERNAL_SERVER_ERROR` if the code is invalid.
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

pub const BAD_REQUEST: ErrDef = ErrDef {
    status: 400,
    title: "Bad Request",
    detail: None,
};

pub const UNSUPPORTED_MEDIA_TYPE: ErrDef = ErrDef {
    status: 415,
    title: "Unsupported Media Type",
    detail: None,
};

pub const NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    detail: Some(
        "The requested URL was not found on the server. If you entered the URL manually please \
         check your spelling and try again.",
    ),
};

pub const NON_CONFORMING_RESPONSE: ErrDef = ErrDef {
    status: 500,
    title: "Unknown Reason",
    detail: None,
};

pub const NON_CONFORMING_RESPONSE_BODY: ErrDef = ErrDef {
    status: 500,
    title: "Response body does not conform to specification",
    detail: None,
};

pub const NON_CONFORMING_RESPONSE_HEADERS: ErrDef = ErrDef {
    status: 500,
    title: "Response headers do not conform to specification",
    detail: None,
};

pub const UNAUTHORIZED: ErrDef = ErrDef {
    status: 401,
    title: "Unauthorized",
    detail: Some(
        "The server could not verify that you are authorized to access the URL requested. You \
         either supplied the wrong credentials (e.g. a bad password), or your browser doesn't \
         understand how to supply the credentials required.",
    ),
};

pub const FORBIDDEN: ErrDef = ErrDef {
    status: 403,
    title: "Forbidden",
    detail: Some(
        "You don't have the permission to access the requested resource. It is either \
         read-protected or not readable by the server.",
    ),
};

/// Fallback for failures that never reach the client with their own text.
pub const INTERNAL_SERVER_ERROR: ErrDef = ErrDef {
    status: 500,
    title: "Internal Server Error",
    detail: Some(
        "The server encountered an internal error and was unable to complete your request. \
         Either the server is overloaded or there is an error in the application.",
    ),
};

/// Title used for resolver problems whose status has no canonical reason.
pub const NOT_IMPLEMENTED_TITLE: &str = "Not Implemented";
