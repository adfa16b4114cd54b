//! The [`Channel`] contract: the single composition seam between generated
//! stubs and the network. A transport implementation satisfies it directly;
//! cross-cutting concerns (retry, error decoding) wrap an inner `Channel`.

mod error_decoding;
mod reqwest_channel;
mod retry;

pub use error_decoding::ErrorDecodingChannel;
pub use reqwest_channel::ReqwestChannel;
pub use retry::RetryingChannel;

use async_trait::async_trait;

use crate::endpoint::Endpoint;
use crate::error::RpcError;
use crate::request::Request;
use crate::response::Response;

/// A uniform, single-method transport/decorator seam. Implementations must
/// be safe for concurrent use by multiple callers and hold no per-call
/// mutable state.
#[async_trait]
pub trait Channel: Send + Sync {
    async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError>;
}

/// Blanket impl so a `Channel` can be shared behind an `Arc` and still
/// satisfy the trait.
#[async_trait]
impl<C: Channel + ?Sized> Channel for std::sync::Arc<C> {
    async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError> {
        (**self).execute(endpoint, request).await
    }
}
