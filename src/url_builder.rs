//! [`PathTemplate`] and [`UrlBuilder`]: turn an [`crate::endpoint::Endpoint`]'s
//! path template plus a caller's path/query parameters into a concrete URL.
//!
//! Percent-encoding is delegated to the `url` crate so path segments and
//! query components follow RFC 3986 exactly rather than a hand-rolled table.

use std::collections::HashMap;

use url::Url;

use crate::error::RpcError;

/// One segment of a path template: either a literal or a named variable
/// filled in at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Fixed(String),
    Variable(String),
}

/// An ordered sequence of path segments, built once per [`crate::endpoint::Endpoint`]
/// and shared across calls.
#[derive(Clone, Debug, Default)]
pub struct PathTemplate {
    segments: Vec<PathSegment>,
}

impl PathTemplate {
    pub fn builder() -> PathTemplateBuilder { PathTemplateBuilder::default() }

    /// Renders this template into `builder`, looking up each variable in
    /// `params`. Fails with `RpcError::Precondition` if a variable has no
    /// matching entry.
    pub fn fill(&self, params: &HashMap<String, String>, builder: &mut UrlBuilder) -> Result<(), RpcError> {
        for segment in &self.segments {
            match segment {
                PathSegment::Fixed(literal) => builder.push_segment(literal),
                PathSegment::Variable(name) => {
                    let value = params.get(name).ok_or_else(|| RpcError::precondition(name.clone()))?;
                    builder.push_segment(value);
                },
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct PathTemplateBuilder {
    segments: Vec<PathSegment>,
}

impl PathTemplateBuilder {
    pub fn fixed(mut self, literal: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Fixed(literal.into()));
        self
    }

    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Variable(name.into()));
        self
    }

    pub fn build(self) -> PathTemplate { PathTemplate { segments: self.segments } }
}

/// Accumulates path segments and query parameters against a base URL for a
/// single request. Discarded once the request has been rendered.
pub struct UrlBuilder {
    base: Url,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new(base: Url) -> Self {
        UrlBuilder {
            base,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn push_segment(&mut self, segment: &str) { self.segments.push(segment.to_owned()); }

    /// Appends a query parameter, preserving insertion order. Calling this
    /// more than once for the same key repeats it in the final URL.
    pub fn query(&mut self, key: &str, value: &str) { self.query.push((key.to_owned(), value.to_owned())); }

    /// Consumes the builder, producing the final URL.
    pub fn build(self) -> Result<Url, RpcError> {
        let mut url = self.base;
        {
            let mut path_segments = url
                .path_segments_mut()
                .map_err(|()| RpcError::invalid_argument("base URL cannot be a base"))?;
            for segment in &self.segments {
                path_segments.push(segment);
            }
        }
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}
