//! [`Runtime`]: the frozen bundle of [`BodySerDe`] and the empty-body
//! deserializer that generated stubs are handed at construction time, plus
//! [`RpcClient`], which wires a [`ClientConf`] into the full `Channel`
//! stack (transport → error decoding → retry).

use std::sync::Arc;

use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::channel::{Channel, ErrorDecodingChannel, ReqwestChannel, RetryingChannel};
use crate::codec::BodySerDe;
use crate::config::{AuthValue, ClientConf};
use crate::endpoint::Endpoint;
use crate::error::RpcError;
use crate::request::Request;
use crate::response::Response;

/// Bundles the codecs a generated stub needs. Built once per client and
/// shared by every call.
#[derive(Clone)]
pub struct Runtime {
    body_serde: BodySerDe,
}

impl Runtime {
    pub fn new(body_serde: BodySerDe) -> Self { Runtime { body_serde } }

    pub fn body_serde(&self) -> &BodySerDe { &self.body_serde }

    /// Deserializer for unit-returning endpoints; does not consult
    /// `Content-Type`.
    pub fn deserialize_empty(&self, response: &Response) -> Result<(), RpcError> {
        self.body_serde.deserialize_empty(response)
    }
}

impl Default for Runtime {
    fn default() -> Self { Runtime::new(BodySerDe::with_default_encodings()) }
}

/// Wires a [`ClientConf`] into the standard decorator stack and exposes the
/// resulting [`Channel`] alongside a [`Runtime`] for generated stubs to
/// hold onto. This is the one piece of assembly a real client needs to do
/// that the core itself stays agnostic to.
#[derive(Clone)]
pub struct RpcClient {
    channel: Arc<dyn Channel>,
    runtime: Runtime,
}

impl RpcClient {
    pub fn new(conf: ClientConf) -> Result<Self, RpcError> {
        if conf.max_attempts < 1 {
            return Err(RpcError::invalid_argument("max_attempts must be at least 1"));
        }

        let mut headers = HeaderMap::new();
        if let Some(auth) = &conf.auth {
            let value = match auth {
                AuthValue::Bearer(token) => format!("Bearer {token}"),
                AuthValue::Basic { username, password } => {
                    use base64::engine::general_purpose::STANDARD as BASE64;
                    use base64::Engine;
                    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
                },
            };
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).map_err(|e| RpcError::invalid_argument(e.to_string()))?,
            );
        }

        let reqwest_client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(conf.request_timeout)
            .build()
            .map_err(RpcError::from)?;

        let transport = ReqwestChannel::new(reqwest_client, conf.base_url);
        let decoding = ErrorDecodingChannel::new(transport);
        let channel: Arc<dyn Channel> = Arc::new(RetryingChannel::new(decoding, conf.max_attempts));

        Ok(RpcClient {
            channel,
            runtime: Runtime::default(),
        })
    }

    pub fn channel(&self) -> Arc<dyn Channel> { self.channel.clone() }

    pub fn runtime(&self) -> &Runtime { &self.runtime }

    /// Convenience passthrough used by generated stubs that don't need to
    /// hold onto the channel separately.
    pub async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError> {
        self.channel.execute(endpoint, request).await
    }
}
