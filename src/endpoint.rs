//! [`Endpoint`]: a statically known method descriptor — HTTP method plus
//! path template. Generated stubs construct one `Endpoint` per IDL method,
//! once, and reuse it for every call.

use crate::error::RpcError;
use crate::url_builder::{PathTemplate, UrlBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Head => http::Method::HEAD,
        }
    }
}

#[derive(Clone)]
pub struct Endpoint {
    method: HttpMethod,
    path: PathTemplate,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: PathTemplate) -> Self { Endpoint { method, path } }

    pub fn http_method(&self) -> HttpMethod { self.method }

    /// Renders this endpoint's path template against `params` into
    /// `builder`. Propagates `RpcError::Precondition` for missing
    /// variables.
    pub fn render_path(
        &self,
        params: &std::collections::HashMap<String, String>,
        builder: &mut UrlBuilder,
    ) -> Result<(), RpcError> {
        self.path.fill(params, builder)
    }
}
