//! [`Response`]: the transport-layer result handed back up the
//! [`crate::channel::Channel`] chain. The body is already fully buffered by
//! the time it reaches here.

/// A response produced by a transport. Status is preserved verbatim,
/// including non-2xx codes; the runtime never follows redirects and never
/// interprets the body itself (that's `BodySerDe`'s job).
pub struct Response {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Response {
            status,
            content_type,
            body,
        }
    }

    pub fn code(&self) -> u16 { self.status }

    pub fn content_type(&self) -> Option<&str> { self.content_type.as_deref() }

    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }

    /// Consumes the response, yielding its body bytes.
    pub fn into_body(self) -> Vec<u8> { self.body }

    pub fn body(&self) -> &[u8] { &self.body }
}
