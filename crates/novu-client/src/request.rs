//! Declarative request description and request construction.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Body, Method, Request, StatusCode};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::query::{QueryOptions, ToQuery};

/// Which statuses count as success for a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpectedStatus {
    /// Any status in 200..=299.
    #[default]
    Success,
    /// Exactly this status.
    Exact(StatusCode),
}

impl ExpectedStatus {
    /// Whether `status` satisfies this expectation.
    pub fn matches(self, status: StatusCode) -> bool {
        match self {
            ExpectedStatus::Success => status.is_success(),
            ExpectedStatus::Exact(expected) => status == expected,
        }
    }
}

/// One outbound call: verb, path segments, optional body and query.
///
/// Facades build one of these per call and hand it to
/// [`NovuClient::execute`](crate::NovuClient::execute).
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    segments: Vec<String>,
    body: Option<Vec<u8>>,
    query: QueryOptions,
    expected_status: ExpectedStatus,
    timeout: Option<Duration>,
}

impl RequestSpec {
    /// Create a request for `method` at the given path segments.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
            query: QueryOptions::new(),
            expected_status: ExpectedStatus::Success,
            timeout: None,
        }
    }

    /// GET request.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    /// POST request.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    /// PUT request.
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    /// PATCH request.
    pub fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PATCH, segments)
    }

    /// DELETE request.
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Attach query parameters.
    pub fn query<Q: ToQuery + ?Sized>(mut self, query: &Q) -> Result<Self> {
        self.query = query.to_query()?;
        Ok(self)
    }

    /// Require exactly this status instead of any 2xx.
    pub fn expect_status(mut self, status: StatusCode) -> Self {
        self.expected_status = ExpectedStatus::Exact(status);
        self
    }

    /// Override the client's default timeout for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path segments relative to the backend URL.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Success expectation.
    pub fn expected_status(&self) -> ExpectedStatus {
        self.expected_status
    }

    /// Verbs that carry an explicit empty body when no body is given.
    fn carries_body(&self) -> bool {
        matches!(self.method, Method::POST | Method::PUT | Method::PATCH)
    }
}

/// Build the HTTP request for `spec`.
///
/// Fails with [`Error::InvalidPath`] when a segment is empty, `.` or `..`.
/// URL parsing collapses such segments, so the call would otherwise reach a
/// different resource.
pub fn build_request(config: &ClientConfig, spec: &RequestSpec) -> Result<Request> {
    if let Some(segment) = spec.segments.iter().find(|s| is_unaddressable(s)) {
        return Err(Error::InvalidPath(format!(
            "'{}' in /{}",
            segment,
            spec.segments.join("/")
        )));
    }

    let mut url = config.backend_url().clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            Error::Config(format!(
                "backend URL '{}' cannot be a base",
                config.backend_url()
            ))
        })?;
        segments.pop_if_empty();
        segments.extend(&spec.segments);
    }

    let query = spec.query.encode();
    if !query.is_empty() {
        url.set_query(Some(&query));
    }

    tracing::trace!(method = %spec.method, url = %url, "building request");

    let mut request = Request::new(spec.method.clone(), url);
    let headers = request.headers_mut();
    headers.insert(AUTHORIZATION, config.authorization()?);
    headers.insert(USER_AGENT, config.user_agent_header()?);

    let body = match &spec.body {
        Some(bytes) => Some(bytes.clone()),
        None if spec.carries_body() => Some(Vec::new()),
        None => None,
    };
    if let Some(bytes) = body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(Body::from(bytes));
    }

    *request.timeout_mut() = Some(spec.timeout.unwrap_or(config.timeout()));
    Ok(request)
}

/// Segments that `PathSegmentsMut` would drop or collapse.
fn is_unaddressable(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientBuilder;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientBuilder::new()
            .api_key("test-key")
            .base_url("http://localhost:3000")
            .build_config()
            .unwrap()
    }

    fn body_bytes(request: &Request) -> Option<&[u8]> {
        request.body().and_then(Body::as_bytes)
    }

    #[test]
    fn test_url_joining() {
        let spec = RequestSpec::get(["subscribers", "62b51a44da1af31d109f5da7", "preferences"]);
        let request = build_request(&config(), &spec).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/v1/subscribers/62b51a44da1af31d109f5da7/preferences"
        );
    }

    #[test]
    fn test_segments_escaped_individually() {
        let spec = RequestSpec::get(["workflows", "a/b c?"]);
        let request = build_request(&config(), &spec).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/v1/workflows/a%2Fb%20c%3F"
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_unaddressable_segments_rejected() {
        for id in ["", ".", ".."] {
            let spec = RequestSpec::delete(["subscribers", id]);
            match build_request(&config(), &spec) {
                Err(Error::InvalidPath(msg)) => assert!(msg.contains("subscribers")),
                other => panic!("Expected invalid path for {:?}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_dotted_ids_are_kept() {
        let spec = RequestSpec::get(["subscribers", "user.1", "..."]);
        let request = build_request(&config(), &spec).unwrap();
        assert_eq!(request.url().path(), "/v1/subscribers/user.1/...");

        let spec = RequestSpec::get(["subscribers", "%2E"]);
        let request = build_request(&config(), &spec).unwrap();
        assert_eq!(request.url().path(), "/v1/subscribers/%252E");
    }

    #[test]
    fn test_query_appended_when_present() {
        let query = QueryOptions::new().scalar("seen", false).scalar("limit", None::<u32>);
        let spec = RequestSpec::get(["subscribers", "s1", "notifications", "unseen"])
            .query(&query)
            .unwrap();
        let request = build_request(&config(), &spec).unwrap();
        assert_eq!(request.url().query(), Some("seen=false"));

        let empty = QueryOptions::new().scalar("limit", None::<u32>);
        let spec = RequestSpec::get(["workflows"]).query(&empty).unwrap();
        let request = build_request(&config(), &spec).unwrap();
        assert!(request.url().query().is_none());
        assert!(!request.url().as_str().ends_with('?'));
    }

    #[test]
    fn test_no_body_for_get_and_delete() {
        for spec in [RequestSpec::get(["workflows"]), RequestSpec::delete(["workflows", "w1"])] {
            let request = build_request(&config(), &spec).unwrap();
            assert!(request.body().is_none());
            assert!(request.headers().get(CONTENT_TYPE).is_none());
        }
    }

    #[test]
    fn test_explicit_empty_body_for_write_verbs() {
        for spec in [
            RequestSpec::post(["integrations", "i1", "set-primary"]),
            RequestSpec::put(["workflows", "w1"]),
            RequestSpec::patch(["subscribers", "s1"]),
        ] {
            let request = build_request(&config(), &spec).unwrap();
            assert_eq!(body_bytes(&request), Some(&[][..]));
            assert_eq!(
                request.headers().get(CONTENT_TYPE).unwrap(),
                "application/json"
            );
        }
    }

    #[test]
    fn test_json_body() {
        let spec = RequestSpec::post(["events", "trigger"])
            .json(&json!({ "name": "welcome" }))
            .unwrap();
        let request = build_request(&config(), &spec).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(body_bytes(&request), Some(&br#"{"name":"welcome"}"#[..]));
    }

    #[test]
    fn test_authorization_header_always_set() {
        let request = build_request(&config(), &RequestSpec::get(["environments", "me"])).unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "ApiKey test-key"
        );
        assert!(request.headers().get(USER_AGENT).is_some());
    }

    #[test]
    fn test_timeout_override() {
        let config = config();
        let request = build_request(&config, &RequestSpec::get(["workflows"])).unwrap();
        assert_eq!(request.timeout(), Some(&config.timeout()));

        let spec = RequestSpec::get(["workflows"]).timeout(Duration::from_millis(250));
        let request = build_request(&config, &spec).unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_millis(250)));
    }

    #[test]
    fn test_expected_status() {
        assert!(ExpectedStatus::Success.matches(StatusCode::OK));
        assert!(ExpectedStatus::Success.matches(StatusCode::NO_CONTENT));
        assert!(!ExpectedStatus::Success.matches(StatusCode::MULTIPLE_CHOICES));

        let created = ExpectedStatus::Exact(StatusCode::CREATED);
        assert!(created.matches(StatusCode::CREATED));
        assert!(!created.matches(StatusCode::OK));
    }
}
