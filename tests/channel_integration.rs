//! End-to-end exercise of the transport Channel and its decorators against
//! an in-process mock HTTP server.

use std::collections::HashMap;

use reqwest::Client as ReqwestClient;
use rpc_runtime::channel::{Channel, ErrorDecodingChannel, ReqwestChannel};
use rpc_runtime::endpoint::{Endpoint, HttpMethod};
use rpc_runtime::error::RpcError;
use rpc_runtime::request::Request;
use rpc_runtime::runtime::Runtime;
use rpc_runtime::url_builder::PathTemplate;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn consensus_tip_endpoint() -> Endpoint { Endpoint::new(HttpMethod::Get, PathTemplate::builder().fixed("tip").build()) }

#[tokio::test]
async fn transport_channel_round_trips_a_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "height": 42 })))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let channel = ReqwestChannel::new(ReqwestClient::new(), base_url);

    let response = channel.execute(&consensus_tip_endpoint(), Request::default()).await.unwrap();
    assert_eq!(response.code(), 200);
    assert_eq!(response.content_type(), Some("application/json"));

    let runtime = Runtime::default();
    #[derive(serde::Deserialize)]
    struct Tip {
        height: u64,
    }
    let tip: Tip = runtime.body_serde().deserialize(&response).unwrap();
    assert_eq!(tip.height, 42);
}

#[tokio::test]
async fn non_success_status_is_decoded_as_a_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tip"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errorCode": "NOT_FOUND",
            "errorName": "Default:NotFound",
            "errorInstanceId": "req-1",
            "parameters": {}
        })))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let channel = ErrorDecodingChannel::new(ReqwestChannel::new(ReqwestClient::new(), base_url));

    let err = channel.execute(&consensus_tip_endpoint(), Request::default()).await.unwrap_err();
    match err {
        RpcError::Remote(remote) => {
            assert_eq!(remote.status, 404);
            assert_eq!(remote.error_code, "NOT_FOUND");
        },
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn path_and_query_params_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/abc123/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "balance": "0" })))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let channel = ReqwestChannel::new(ReqwestClient::new(), base_url);

    let endpoint = Endpoint::new(
        HttpMethod::Get,
        PathTemplate::builder().fixed("addresses").variable("address").fixed("balance").build(),
    );

    let mut path_params = HashMap::new();
    path_params.insert("address".to_owned(), "abc123".to_owned());
    let request = Request {
        path_params,
        ..Request::default()
    };

    let response = channel.execute(&endpoint, request).await.unwrap();
    assert_eq!(response.code(), 200);
}

#[tokio::test]
async fn connect_failure_surfaces_as_a_transport_error() {
    // Nothing listens on this port; connection should be refused.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let channel = ReqwestChannel::new(ReqwestClient::new(), base_url);

    let err = channel.execute(&consensus_tip_endpoint(), Request::default()).await.unwrap_err();
    assert!(matches!(err, RpcError::Transport(_)));
    assert!(err.is_retryable());
}
