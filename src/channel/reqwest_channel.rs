//! [`ReqwestChannel`]: the one shipped transport implementation. Converts
//! an [`Endpoint`] + [`Request`] into an HTTP exchange and back; it never
//! retries and never interprets non-2xx statuses as errors — that's the
//! decorators' job.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::channel::Channel;
use crate::endpoint::Endpoint;
use crate::error::RpcError;
use crate::request::Request;
use crate::response::Response;
use crate::url_builder::UrlBuilder;

/// A transport `Channel` backed by `reqwest`. Holds no per-call state and
/// is cheap to clone (the underlying `reqwest::Client` is reference
/// counted internally).
#[derive(Clone)]
pub struct ReqwestChannel {
    client: ReqwestClient,
    base_url: Url,
}

impl ReqwestChannel {
    pub fn new(client: ReqwestClient, base_url: Url) -> Self { ReqwestChannel { client, base_url } }
}

#[async_trait]
impl Channel for ReqwestChannel {
    async fn execute(&self, endpoint: &Endpoint, request: Request) -> Result<Response, RpcError> {
        let mut url_builder = UrlBuilder::new(self.base_url.clone());
        endpoint.render_path(&request.path_params, &mut url_builder)?;
        for (key, value) in &request.query_params {
            url_builder.query(key, value);
        }
        let url = url_builder.build()?;

        let mut builder = self.client.request(endpoint.http_method().into(), url);
        for (name, value) in &request.header_params {
            builder = builder.header(name, value);
        }

        builder = match &request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, body.content_type())
                .body(body.content().to_vec()),
            None => builder,
        };

        let response = builder.send().await.map_err(RpcError::from)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await.map_err(RpcError::from)?.to_vec();

        Ok(Response::new(status, content_type, bytes))
    }
}
