//! RFC 9457 Problem Details document and the pure problem formatter.
//!
//! Errors in this crate only carry data. Turning that data into a wire
//! response happens exactly once, through [`problem`], which the response
//! boundary (see [`crate::boundary`]) calls with the error's fields.

use http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Problem type used when the caller does not supply one.
pub const ABOUT_BLANK: &str = "about:blank";

/// Members defined by RFC 9457 itself; extension data may not shadow them.
const RESERVED_MEMBERS: [&str; 5] = ["type", "title", "status", "detail", "instance"];

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// RFC 9457 Problem Details body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    /// Serializes as u16 for RFC 9457 compatibility.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    pub status: StatusCode,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Extension members, serialized at the top level of the document.
    #[serde(flatten)]
    pub ext: Map<String, Value>,
}

/// A rendered problem: status line, headers and the JSON body.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ProblemResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Problem,
}

impl ProblemResponse {
    /// Serialize the body to JSON bytes.
    ///
    /// # Errors
    /// Returns an error if an extension member fails to serialize.
    pub fn body_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.body)
    }
}

/// Build a problem response from its constituent fields.
///
/// `type_url` falls back to `about:blank`; an absent `detail` or `instance`
/// is left out of the body; `ext` members are merged into the top level of
/// the document, except for names reserved by RFC 9457. The response always
/// carries `content-type: application/problem+json` in addition to `headers`.
pub fn problem(
    status: StatusCode,
    title: &str,
    detail: Option<&str>,
    type_url: Option<&str>,
    instance: Option<&str>,
    headers: Option<&HeaderMap>,
    ext: Option<&Map<String, Value>>,
) -> ProblemResponse {
    let mut members = Map::new();
    if let Some(ext) = ext {
        for (name, value) in ext {
            if RESERVED_MEMBERS.contains(&name.as_str()) {
                tracing::debug!(member = %name, "dropping extension member that shadows a standard member");
                continue;
            }
            members.insert(name.clone(), value.clone());
        }
    }

    let mut response_headers = headers.cloned().unwrap_or_default();
    response_headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
    );

    ProblemResponse {
        status,
        headers: response_headers,
        body: Problem {
            type_url: type_url.unwrap_or(ABOUT_BLANK).to_owned(),
            title: title.to_owned(),
            status,
            detail: detail.map(str::to_owned),
            instance: instance.map(str::to_owned),
            ext: members,
        },
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn problem_defaults_type_and_omits_absent_members() {
        let resp = problem(StatusCode::NOT_FOUND, "Not Found", None, None, None, None, None);
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body.type_url, ABOUT_BLANK);

        let value = serde_json::to_value(&resp.body).unwrap();
        assert_eq!(
            value,
            json!({"type": "about:blank", "title": "Not Found", "status": 404})
        );
    }

    #[test]
    fn problem_sets_content_type_and_keeps_caller_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("www-authenticate", HeaderValue::from_static("Bearer"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let resp = problem(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            Some("No authorization token provided"),
            None,
            None,
            Some(&headers),
            None,
        );
        assert_eq!(resp.headers["www-authenticate"], "Bearer");
        assert_eq!(resp.headers[CONTENT_TYPE], APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn problem_merges_extension_members_at_top_level() {
        let ext = json!({"errors": ["email"], "status": 999})
            .as_object()
            .cloned()
            .unwrap();
        let resp = problem(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            Some("invalid payload"),
            Some("https://errors.example.com/validation"),
            Some("/users/1"),
            None,
            Some(&ext),
        );

        let value = serde_json::to_value(&resp.body).unwrap();
        assert_eq!(value["errors"], json!(["email"]));
        assert_eq!(value["status"], 400);
        assert_eq!(value["type"], "https://errors.example.com/validation");
        assert_eq!(value["instance"], "/users/1");
        assert_eq!(value["detail"], "invalid payload");
    }

    #[test]
    fn problem_deserializes_status_from_u16() {
        let json = r#"{"type":"about:blank","title":"Not Found","status":404,"trace_id":"abc"}"#;
        let p: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.detail, None);
        assert_eq!(p.ext.get("trace_id"), Some(&json!("abc")));
    }

    #[test]
    fn body_bytes_is_valid_json() {
        let resp = problem(StatusCode::CONFLICT, "Conflict", Some("taken"), None, None, None, None);
        let bytes = resp.body_bytes().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], 409);
    }
}
