//! [`ErrorDecodingChannel`]: wraps an inner [`Channel`] and turns non-2xx
//! responses into [`RpcError::Remote`] via [`ErrorDecoder`], so stubs see a
//! single failure channel instead of having to branch on status codes
//! themselves.

use async_trait::async_trait;

use crate::channel::Channel;
use crate::endpoint::Endpoint;
use crate::error::RpcError;
use crate::remote_error::ErrorDecoder;
use crate::request::Request;
use crate::response::Response;

pub struct ErrorDecodingChannel<C> {
    inner: C,
}

impl<C: Channel> ErrorDecodingChannel<C> {
    pub fn new(inner: C) -> Self { ErrorDecodingChannel { inner } }
}

#[async_trait]
impl<C: Channel> Channel for ErrorDecodingChannel<C> {
    async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError> {
        let response = self.inner.execute(endpoint, request).await?;
        if response.is_success() {
            return Ok(response);
        }

        match ErrorDecoder::decode(&response) {
            Ok(remote_error) => {
                log::debug!("remote error decoded: {remote_error}");
                Err(RpcError::Remote(remote_error))
            },
            Err(decode_failure) => Err(decode_failure),
        }
    }
}
