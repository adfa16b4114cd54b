//! [`RemoteError`] and the [`ErrorDecoder`] that produces it from a
//! non-success [`crate::response::Response`].

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::codec::media_type;
use crate::error::RpcError;
use crate::response::Response;

/// A structured server-side failure envelope, decoded from a non-2xx
/// response whose body is a JSON object of this shape.
#[derive(Clone, Debug)]
pub struct RemoteError {
    pub error_code: String,
    pub error_name: String,
    pub error_instance_id: String,
    pub parameters: HashMap<String, String>,
    pub status: u16,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RemoteException: {} ({}) with instance ID {}",
            self.error_code, self.error_name, self.error_instance_id
        )
    }
}

#[derive(Deserialize)]
struct RemoteErrorWire {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(rename = "errorName")]
    error_name: String,
    #[serde(rename = "errorInstanceId")]
    error_instance_id: String,
    parameters: HashMap<String, String>,
}

/// Interprets a non-success [`Response`] as a [`RemoteError`], or raises a
/// decoding failure when the body isn't the expected JSON envelope.
///
/// Status codes in `[200, 300)` are never passed to this decoder; every
/// other status, including 3xx redirects, is decoded uniformly — the
/// runtime never follows redirects.
pub struct ErrorDecoder;

impl ErrorDecoder {
    pub fn decode(response: &Response) -> Result<RemoteError, RpcError> {
        let status = response.code();

        match response.content_type() {
            Some(ct) if media_type(ct).eq_ignore_ascii_case("application/json") => {},
            _ => {
                return Err(RpcError::runtime(format!(
                    "Failed to interpret response body as SerializableError: {{code={status}}}"
                )))
            },
        };

        let body = response.body();
        if body.is_empty() {
            return Err(RpcError::runtime(
                "Failed to deserialize response body as JSON, could not deserialize SerializableError: empty body",
            ));
        }

        let wire: RemoteErrorWire = serde_json::from_slice(body).map_err(|e| {
            RpcError::runtime(format!("Failed to interpret response body as SerializableError: {e}"))
        })?;

        Ok(RemoteError {
            error_code: wire.error_code,
            error_name: wire.error_name,
            error_instance_id: wire.error_instance_id,
            parameters: wire.parameters,
            status,
        })
    }
}
