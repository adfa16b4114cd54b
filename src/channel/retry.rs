//! [`RetryingChannel`]: replays the same [`Request`] against an inner
//! [`Channel`] up to `max_attempts` times, retrying only transport/IO-level
//! failures. HTTP responses (even non-2xx ones) are never retried here;
//! no backoff is applied between attempts.

use async_trait::async_trait;

use crate::channel::Channel;
use crate::endpoint::Endpoint;
use crate::error::RpcError;
use crate::request::Request;
use crate::response::Response;

pub struct RetryingChannel<C> {
    inner: C,
    max_attempts: u32,
}

impl<C: Channel> RetryingChannel<C> {
    /// `max_attempts` must be at least 1; a value of 1 disables retrying.
    pub fn new(inner: C, max_attempts: u32) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be at least 1");
        RetryingChannel { inner, max_attempts }
    }
}

#[async_trait]
impl<C: Channel> Channel for RetryingChannel<C> {
    async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.inner.execute(endpoint, request.clone()).await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.max_attempts && err.is_retryable() => {
                    log::warn!(
                        "retrying after attempt {attempt}/{max_attempts}: {err}",
                        max_attempts = self.max_attempts
                    );
                    continue;
                },
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::url_builder::PathTemplate;

    struct ScriptedChannel {
        attempts: AtomicUsize,
        /// `true` means the attempt at this index fails with a retryable
        /// transport error; `false` means it succeeds.
        script: Vec<bool>,
    }

    #[async_trait]
    impl Channel for ScriptedChannel {
        async fn execute(&self, _endpoint: &Endpoint, _request: Request) -> Result<Response, RpcError> {
            let index = self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.script.get(index).copied().unwrap_or(false) {
                Err(RpcError::Transport(Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "connect failed",
                ))))
            } else {
                Ok(Response::new(200, None, vec![]))
            }
        }
    }

    fn endpoint() -> Endpoint { Endpoint::new(crate::endpoint::HttpMethod::Get, PathTemplate::builder().build()) }

    #[tokio::test]
    async fn retries_to_success() {
        let inner = ScriptedChannel {
            attempts: AtomicUsize::new(0),
            script: vec![true, true, false],
        };
        let channel = RetryingChannel::new(inner, 3);

        let result = channel.execute(&endpoint(), Request::default()).await;

        assert!(result.is_ok());
        assert_eq!(channel.inner.attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_retries_and_surfaces_last_error() {
        let inner = ScriptedChannel {
            attempts: AtomicUsize::new(0),
            script: vec![true, true, true],
        };
        let channel = RetryingChannel::new(inner, 3);

        let result = channel.execute(&endpoint(), Request::default()).await;

        assert!(result.is_err());
        assert_eq!(channel.inner.attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn passthrough_on_first_attempt_success() {
        let inner = ScriptedChannel {
            attempts: AtomicUsize::new(0),
            script: vec![false],
        };
        let channel = RetryingChannel::new(inner, 3);

        let result = channel.execute(&endpoint(), Request::default()).await;

        assert!(result.is_ok());
        assert_eq!(channel.inner.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_retryable_failures_are_not_retried() {
        struct AlwaysRuntimeError;

        #[async_trait]
        impl Channel for AlwaysRuntimeError {
            async fn execute(&self, _endpoint: &Endpoint, _request: Request) -> Result<Response, RpcError> {
                Err(RpcError::runtime("decode failed"))
            }
        }

        let channel = RetryingChannel::new(AlwaysRuntimeError, 5);
        let result = channel.execute(&endpoint(), Request::default()).await;
        assert!(result.is_err());
    }
}
