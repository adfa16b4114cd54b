use super::Encoding;
use crate::error::RpcError;

/// The default encoding: proper JSON via `serde_json`.
pub struct JsonEncoding;

impl Encoding for JsonEncoding {
    fn content_type(&self) -> &str { "application/json" }

    fn serialize_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, RpcError> {
        serde_json::to_vec(value).map_err(|e| RpcError::EncodeFailure(Box::new(e)))
    }

    fn deserialize_bytes(&self, bytes: &[u8]) -> Result<serde_json::Value, RpcError> {
        serde_json::from_slice(bytes).map_err(|e| RpcError::DeserializeFailure(Box::new(e)))
    }
}
