//! The content-negotiating body codec: [`Encoding`] is a content-type-tagged
//! plugin, [`BodySerDe`] is the ordered registry of them that stub-generated
//! code is handed via [`crate::runtime::Runtime`].

mod json;
mod plain_text;

pub use json::JsonEncoding;
pub use plain_text::PlainTextEncoding;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RpcError;
use crate::request::RequestBody;
use crate::response::Response;

/// A content-type-tagged codec plugin. Implementations are registered with
/// a [`BodySerDe`] in preference order.
pub trait Encoding: Send + Sync {
    /// This encoding's canonical content type, e.g. `application/json`.
    fn content_type(&self) -> &str;

    /// Whether this encoding handles a content type parsed from a response
    /// (media-type portion only, parameters like `charset` already
    /// stripped, compared case-insensitively).
    fn supports_content_type(&self, media_type: &str) -> bool { media_type.eq_ignore_ascii_case(self.content_type()) }

    /// Renders an already-converted `serde_json::Value` as this encoding's
    /// wire bytes. Using `Value` as the intermediate representation keeps
    /// `Encoding` object-safe while still letting each encoding pick its
    /// own wire shape (JSON proper, or a bare string for `text/plain`).
    fn serialize_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, RpcError>;

    fn deserialize_bytes(&self, bytes: &[u8]) -> Result<serde_json::Value, RpcError>;
}

/// Strips `Content-Type` parameters (e.g. `; charset=UTF-8`), returning
/// just the `type/subtype` portion.
pub fn media_type(content_type: &str) -> &str { content_type.split(';').next().unwrap_or(content_type).trim() }

/// The content-negotiating façade over an ordered, non-empty list of
/// [`Encoding`]s. The first encoding registered is the default used for
/// serialization.
#[derive(Clone)]
pub struct BodySerDe {
    encodings: Arc<Vec<Arc<dyn Encoding>>>,
}

impl BodySerDe {
    /// Builds a registry from `encodings` in preference order. Panics if
    /// the list is empty; a `BodySerDe` with no encodings cannot satisfy
    /// its own invariant.
    pub fn new(encodings: Vec<Arc<dyn Encoding>>) -> Self {
        assert!(!encodings.is_empty(), "BodySerDe requires at least one Encoding");
        BodySerDe {
            encodings: Arc::new(encodings),
        }
    }

    /// The default, ecosystem-typical registry: JSON first, plain text
    /// second.
    pub fn with_default_encodings() -> Self {
        BodySerDe::new(vec![Arc::new(JsonEncoding), Arc::new(PlainTextEncoding)])
    }

    /// Serializes `value` using the default (first) encoding.
    pub fn serialize<T>(&self, value: &T) -> Result<RequestBody, RpcError>
    where
        T: Serialize,
    {
        let encoding = &self.encodings[0];
        let as_value = serde_json::to_value(value).map_err(|e| RpcError::EncodeFailure(Box::new(e)))?;
        let bytes = encoding.serialize_value(&as_value)?;
        Ok(RequestBody::new(encoding.content_type().to_owned(), bytes))
    }

    /// Performs content negotiation against `response`'s `Content-Type`
    /// header and deserializes the body through the first matching
    /// encoding.
    pub fn deserialize<T>(&self, response: &Response) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
    {
        let content_type = response
            .content_type()
            .ok_or_else(|| RpcError::invalid_argument("Response is missing Content-Type header"))?;
        let media_type = media_type(content_type);

        let encoding = self.encodings.iter().find(|e| e.supports_content_type(media_type)).ok_or_else(|| {
            log::debug!(
                "content negotiation fell through: no registered encoding supports Content-Type {media_type}"
            );
            RpcError::UnsupportedMediaType
        })?;

        let value = encoding.deserialize_bytes(response.body())?;
        serde_json::from_value(value)
            .map_err(|e| RpcError::DeserializeFailure(Box::new(e)))
    }

    /// The empty-body deserializer used by unit-returning endpoints. Does
    /// not consult `Content-Type`; any non-empty body is a violation.
    pub fn deserialize_empty(&self, response: &Response) -> Result<(), RpcError> {
        if response.body().is_empty() {
            Ok(())
        } else {
            Err(RpcError::EmptyBodyViolation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(content_type: Option<&str>, body: &str) -> Response {
        Response::new(200, content_type.map(|s| s.to_owned()), body.as_bytes().to_vec())
    }

    #[test]
    fn content_type_match_picks_the_first_supporting_encoding() {
        let serde = BodySerDe::new(vec![Arc::new(JsonEncoding), Arc::new(PlainTextEncoding)]);

        let json_resp = response_with(Some("application/json"), "\"hello\"");
        let value: String = serde.deserialize(&json_resp).unwrap();
        assert_eq!(value, "hello");

        let text_resp = response_with(Some("text/plain"), "hello");
        let value: String = serde.deserialize(&text_resp).unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn missing_content_type_is_invalid_argument() {
        let serde = BodySerDe::new(vec![Arc::new(JsonEncoding)]);
        let resp = response_with(None, "hello");
        let err = serde.deserialize::<String>(&resp).unwrap_err();
        assert!(matches!(err, RpcError::InvalidArgument(m) if m.contains("Response is missing Content-Type header")));
    }

    #[test]
    fn unsupported_content_type_is_unsupported_media_type() {
        let serde = BodySerDe::new(vec![Arc::new(JsonEncoding)]);
        let resp = response_with(Some("application/unknown"), "hello");
        let err = serde.deserialize::<String>(&resp).unwrap_err();
        assert!(matches!(err, RpcError::UnsupportedMediaType));
    }

    #[test]
    fn serialize_uses_the_default_head_encoding() {
        let serde = BodySerDe::new(vec![Arc::new(PlainTextEncoding), Arc::new(JsonEncoding)]);
        let body = serde.serialize(&"test".to_owned()).unwrap();
        assert_eq!(body.content_type(), "text/plain");
    }

    #[test]
    fn empty_body_deserializer_accepts_only_empty_bodies() {
        let serde = BodySerDe::with_default_encodings();
        let empty = Response::new(204, None, vec![]);
        serde.deserialize_empty(&empty).unwrap();

        let non_empty = Response::new(200, None, vec![1]);
        let err = serde.deserialize_empty(&non_empty).unwrap_err();
        assert!(matches!(err, RpcError::EmptyBodyViolation));
    }
}
