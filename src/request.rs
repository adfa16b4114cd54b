//! [`Request`] and [`RequestBody`]: the immutable value types a generated
//! stub builds and hands to a [`crate::channel::Channel`].

use std::collections::HashMap;
use std::sync::Arc;

/// A request body with a content type and a reproducible byte source.
/// Reproducibility matters because `RetryingChannel` replays the same
/// `Request` value on every attempt.
#[derive(Clone)]
pub struct RequestBody {
    content_type: String,
    bytes: Arc<Vec<u8>>,
}

impl RequestBody {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        RequestBody {
            content_type: content_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    pub fn content_type(&self) -> &str { &self.content_type }

    /// Reads the body's bytes. May be called more than once; each call
    /// returns the same content.
    pub fn content(&self) -> &[u8] { &self.bytes }

    pub fn length(&self) -> Option<usize> { Some(self.bytes.len()) }
}

/// A single RPC request, constructed by a stub and consumed by a
/// [`crate::channel::Channel`]. All keys/values are already encoded
/// strings; [`crate::plain::PlainCodec`] produces them.
#[derive(Clone, Default)]
pub struct Request {
    pub path_params: HashMap<String, String>,
    pub header_params: Vec<(String, String)>,
    pub query_params: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn builder() -> RequestBuilder { RequestBuilder::default() }
}

#[derive(Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.path_params.insert(name.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.header_params.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query_params.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.request.body = Some(body);
        self
    }

    pub fn build(self) -> Request { self.request }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_every_field() {
        let request = Request::builder()
            .path_param("id", "abc")
            .header("X-Trace-Id", "t-1")
            .query("verbose", "true")
            .body(RequestBody::new("application/json", b"{}".to_vec()))
            .build();

        assert_eq!(request.path_params.get("id").map(String::as_str), Some("abc"));
        assert_eq!(request.header_params, vec![("X-Trace-Id".to_owned(), "t-1".to_owned())]);
        assert_eq!(request.query_params, vec![("verbose".to_owned(), "true".to_owned())]);
        assert_eq!(request.body.as_ref().map(RequestBody::content_type), Some("application/json"));
    }
}
