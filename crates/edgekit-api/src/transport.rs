use edgekit_core::value::{Value, ValueMap};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::{cell::RefCell, collections::VecDeque, fmt};
use thiserror::Error as ThisError;

// Module: transport
// Responsibility: the synchronous wire seam. Requests are method + path +
// query + optional body; responses are decoded `Value`s. Implementations own
// HTTP, auth, and JSON decoding. Controllers never see bytes.

///
/// Method
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// EndpointPath
///
/// Builder for management-API paths rooted at an organization. Each joined
/// segment is percent-encoded, so identities like developer emails are safe
/// to splice in.
///

// RFC 3986 unreserved characters pass through untouched.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EndpointPath(String);

impl EndpointPath {
    #[must_use]
    pub fn organization(name: &str) -> Self {
        let mut path = String::from("/organizations/");
        path.extend(utf8_percent_encode(name, SEGMENT));

        Self(path)
    }

    #[must_use]
    pub fn join(mut self, segment: &str) -> Self {
        self.0.push('/');
        self.0.extend(utf8_percent_encode(segment, SEGMENT));
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

///
/// Request
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: EndpointPath,
    pub query: Vec<(String, String)>,
    pub body: Option<ValueMap>,
}

impl Request {
    #[must_use]
    pub const fn new(method: Method, path: EndpointPath) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub const fn get(path: EndpointPath) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub const fn post(path: EndpointPath) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub const fn put(path: EndpointPath) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub const fn delete(path: EndpointPath) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: ValueMap) -> Self {
        self.body = Some(body);
        self
    }
}

///
/// Pager
///
/// Listing window. `start_key` and `limit` become the `startKey` and `count`
/// query parameters the service pages by.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pager {
    pub start_key: Option<String>,
    pub limit: Option<u32>,
}

impl Pager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_key: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn starting_at(mut self, key: impl Into<String>) -> Self {
        self.start_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn apply(&self, mut request: Request) -> Request {
        if let Some(key) = &self.start_key {
            request = request.query("startKey", key);
        }
        if let Some(limit) = self.limit {
            request = request.query("count", limit.to_string());
        }

        request
    }
}

///
/// Transport
///
/// The only I/O boundary in the workspace. Implementations are synchronous
/// and may keep interior state behind `&self`.
///

pub trait Transport {
    fn send(&self, request: &Request) -> Result<Value, TransportError>;
}

///
/// TransportError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TransportError {
    #[error("response decode failed: {message}")]
    Decode { message: String },

    #[error("transport failure: {message}")]
    Io { message: String },

    #[error("status {code}: {message}")]
    Status { code: u16, message: String },
}

///
/// StubTransport
///
/// Scripted in-memory transport. Replies are consumed in push order; once
/// the script runs dry every call fails. Every request is recorded for
/// assertions.
///

#[derive(Default)]
pub struct StubTransport {
    replies: RefCell<VecDeque<Result<Value, TransportError>>>,
    requests: RefCell<Vec<Request>>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_ok(&self, value: Value) {
        self.replies.borrow_mut().push_back(Ok(value));
    }

    pub fn reply_err(&self, error: TransportError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<Request> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &Request) -> Result<Value, TransportError> {
        self.requests.borrow_mut().push(request.clone());

        self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(TransportError::Io {
                message: "no scripted reply left".to_string(),
            })
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roots_at_the_organization() {
        let path = EndpointPath::organization("dev-org").join("developers");
        assert_eq!(path.as_str(), "/organizations/dev-org/developers");
    }

    #[test]
    fn test_path_encodes_reserved_characters() {
        let path = EndpointPath::organization("dev-org")
            .join("developers")
            .join("a@example.com");

        assert_eq!(
            path.as_str(),
            "/organizations/dev-org/developers/a%40example.com"
        );
    }

    #[test]
    fn test_path_keeps_unreserved_characters() {
        let path = EndpointPath::organization("o").join("app_1.v2~x-y");
        assert_eq!(path.as_str(), "/organizations/o/app_1.v2~x-y");
    }

    #[test]
    fn test_request_builders() {
        let mut body = ValueMap::new();
        body.insert("name", Value::from("app1"));

        let request = Request::post(EndpointPath::organization("o").join("apps"))
            .query("action", "approve")
            .body(body.clone());

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path.as_str(), "/organizations/o/apps");
        assert_eq!(
            request.query,
            vec![("action".to_string(), "approve".to_string())]
        );
        assert_eq!(request.body, Some(body));
    }

    #[test]
    fn test_pager_appends_listing_parameters() {
        let pager = Pager::new().starting_at("app42").limit(25);
        let request = pager.apply(Request::get(EndpointPath::organization("o")));

        assert_eq!(
            request.query,
            vec![
                ("startKey".to_string(), "app42".to_string()),
                ("count".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_pager_adds_nothing() {
        let request = Pager::new().apply(Request::get(EndpointPath::organization("o")));
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_stub_replies_in_order_then_runs_dry() {
        let stub = StubTransport::new();
        stub.reply_ok(Value::from("first"));
        stub.reply_err(TransportError::Status {
            code: 404,
            message: "not found".to_string(),
        });

        let request = Request::get(EndpointPath::organization("o"));
        assert_eq!(stub.send(&request), Ok(Value::from("first")));
        assert!(matches!(
            stub.send(&request),
            Err(TransportError::Status { code: 404, .. })
        ));
        assert!(matches!(stub.send(&request), Err(TransportError::Io { .. })));

        assert_eq!(stub.requests().len(), 3);
        assert_eq!(stub.last_request(), Some(request));
    }
}
