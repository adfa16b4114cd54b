//! Illustrates the shape a stub generator emits for an IDL service
//! definition. This is hand-written scaffolding, not a code generator: a
//! real deployment would have this file (and `GreetingServiceStub`'s
//! methods) produced mechanically from a service definition.
//!
//! The pretend service:
//!
//! ```text
//! service GreetingService {
//!     endpoint greet(name: string, loud: optional<boolean>) -> string;
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;
use rpc_runtime::channel::Channel;
use rpc_runtime::endpoint::{Endpoint, HttpMethod};
use rpc_runtime::error::RpcError;
use rpc_runtime::plain::PlainCodec;
use rpc_runtime::request::Request;
use rpc_runtime::runtime::Runtime;
use rpc_runtime::url_builder::PathTemplate;

/// Generated stubs hold one `Endpoint` per method, built once and reused.
static GREET_ENDPOINT: Lazy<Endpoint> =
    Lazy::new(|| Endpoint::new(HttpMethod::Get, PathTemplate::builder().fixed("greet").variable("name").build()));

/// The generated stub type. A real generator would name this after the
/// service (`GreetingServiceClient`) and emit one method per endpoint.
pub struct GreetingServiceClient<C> {
    channel: C,
    runtime: Runtime,
}

impl<C: Channel> GreetingServiceClient<C> {
    pub fn new(channel: C, runtime: Runtime) -> Self { GreetingServiceClient { channel, runtime } }

    /// The async facet: returns the decoded result directly.
    pub async fn greet(&self, name: &str, loud: Option<bool>) -> Result<String, RpcError> {
        if name.is_empty() {
            return Err(RpcError::precondition("name"));
        }

        let mut path_params = HashMap::new();
        path_params.insert("name".to_owned(), name.to_owned());

        let mut request = Request::builder();
        if let Some(loud) = loud {
            request = request.query("loud", loud.encode_plain()?);
        }
        let request = request.build().with_path_params(path_params);

        let response = self.channel.execute(&GREET_ENDPOINT, request).await?;
        self.runtime.body_serde().deserialize(&response)
    }

    /// The blocking facet: awaits the same future up to `timeout`,
    /// unwrapping the execution wrapper so callers observe the underlying
    /// failure directly rather than a nested one.
    pub fn greet_blocking(
        &self,
        handle: &tokio::runtime::Handle,
        name: &str,
        loud: Option<bool>,
        timeout: Duration,
    ) -> Result<String, RpcError> {
        handle.block_on(async {
            match tokio::time::timeout(timeout, self.greet(name, loud)).await {
                Ok(result) => result,
                Err(_) => Err(RpcError::Timeout(timeout)),
            }
        })
    }
}

// `Request` doesn't expose a `with_path_params` helper in the core crate
// (stubs build path params via the builder directly); this trait keeps the
// demo terse without reaching into private fields.
trait WithPathParams {
    fn with_path_params(self, params: HashMap<String, String>) -> Self;
}

impl WithPathParams for Request {
    fn with_path_params(mut self, params: HashMap<String, String>) -> Self {
        self.path_params = params;
        self
    }
}

fn main() {
    println!("this file demonstrates the generated-stub pattern; see its doc comment and tests");
}
