use super::Encoding;
use crate::error::RpcError;

/// A `text/plain` encoding for bare string payloads: the wire bytes are the
/// string's UTF-8 content, with no surrounding JSON quoting.
pub struct PlainTextEncoding;

impl Encoding for PlainTextEncoding {
    fn content_type(&self) -> &str { "text/plain" }

    fn serialize_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, RpcError> {
        let s = value
            .as_str()
            .ok_or_else(|| RpcError::invalid_argument("text/plain encoding requires a string value"))?;
        Ok(s.as_bytes().to_vec())
    }

    fn deserialize_bytes(&self, bytes: &[u8]) -> Result<serde_json::Value, RpcError> {
        let s = std::str::from_utf8(bytes).map_err(|e| RpcError::DeserializeFailure(Box::new(e)))?;
        Ok(serde_json::Value::String(s.to_owned()))
    }
}
