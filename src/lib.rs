//! Core request/response plane for a typed RPC client runtime: generated
//! service stubs build a [`request::Request`] against an [`endpoint::Endpoint`],
//! hand it to a [`channel::Channel`], and get back a typed result or a
//! structured [`remote_error::RemoteError`].
//!
//! See `demos/example_service.rs` for a worked example of the
//! generated-stub shape this crate is designed around.

pub mod channel;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod plain;
pub mod remote_error;
pub mod request;
pub mod response;
pub mod runtime;
pub mod url_builder;

pub use config::ClientConf;
pub use error::RpcError;
pub use runtime::RpcClient;
