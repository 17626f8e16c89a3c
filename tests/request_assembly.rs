//! End-to-end request assembly through the runner.

mod common;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rpc_client::cli::{CliError, Runner};
use rpc_client::encoding::{
    BoxError, Encoding, EncodingError, JsonSerializer, Serializer, SerializerBuilders,
};
use rpc_client::peers::{PeerError, PeerProvider, PeerProviderRegistry, ProviderError};
use rpc_client::pipeline::MiddlewareError;
use rpc_client::transport::Headers;
use rpc_client::{CallContext, Options, PeerUrl, Request, RequestPipeline, TransportMiddleware};

fn pairs(items: &[(&str, &str)]) -> Headers {
    items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Serves a fixed peer list for any URL.
struct StaticPeers(Vec<&'static str>);

#[async_trait]
impl PeerProvider for StaticPeers {
    async fn resolve(&self, _ctx: &CallContext, _url: &PeerUrl) -> Result<Vec<String>, ProviderError> {
        Ok(self.0.iter().map(|p| p.to_string()).collect())
    }
}

/// Stands in for a schema-aware serializer by reusing the JSON one.
struct FakeBuilders;

impl SerializerBuilders for FakeBuilders {
    fn thrift(
        &self,
        _schema_file: Option<&Path>,
        procedure: &str,
        _multiplexed: bool,
    ) -> Result<Box<dyn Serializer>, EncodingError> {
        Ok(Box::new(JsonSerializer::new(procedure)))
    }

    fn health(&self, _encoding: &Encoding) -> Result<Box<dyn Serializer>, EncodingError> {
        Ok(Box::new(JsonSerializer::new("Meta::health")))
    }
}

struct HeaderMiddleware;

#[async_trait]
impl TransportMiddleware for HeaderMiddleware {
    async fn apply(&self, _ctx: &CallContext, mut request: Request) -> Result<Request, BoxError> {
        request.headers.insert("auth".into(), "token".into());
        request.headers.insert("trace".into(), "middleware".into());
        Ok(request)
    }
}

struct RejectingMiddleware;

#[async_trait]
impl TransportMiddleware for RejectingMiddleware {
    async fn apply(&self, _ctx: &CallContext, _request: Request) -> Result<Request, BoxError> {
        Err("denied".into())
    }
}

fn options() -> Options {
    let mut opts = Options::default();
    opts.request.encoding = Encoding::Json;
    opts.request.procedure = "Echo::echo".into();
    opts.request.request_inline = r#"{ "message": "hi" }"#.into();
    opts.transport.service_name = "echo".into();
    opts.transport.caller_name = "tests".into();
    opts.transport.peers = vec!["127.0.0.1:4040".into()];
    opts
}

#[tokio::test]
async fn test_prepare_json_call() {
    let mut opts = options();
    opts.request.headers_inline = "trace: from-input\nretries: 3".into();
    opts.request.headers = pairs(&[("trace", "from-flag")]);
    opts.request.baggage = pairs(&[("tenant", "a")]);
    opts.transport.transport_headers = pairs(&[("rk", "echo-rk")]);
    opts.transport.shard_key = "shard-1".into();

    let runner = Runner::new().with_pipeline(RequestPipeline::new().with_middleware(Arc::new(HeaderMiddleware)));
    let call = runner.prepare(&opts).await.unwrap();

    assert_eq!(call.service, "echo");
    assert_eq!(call.caller, "tests");
    assert_eq!(call.encoding, "json");
    assert_eq!(call.peers, vec!["127.0.0.1:4040"]);

    let request = call.request;
    assert_eq!(request.method, "Echo::echo");
    assert_eq!(request.body, r#"{"message":"hi"}"#);
    assert_eq!(request.timeout_ms, 1000);
    assert_eq!(request.shard_key, "shard-1");
    assert_eq!(
        request.headers,
        pairs(&[("auth", "token"), ("retries", "3"), ("trace", "from-flag")])
    );
    assert_eq!(request.transport_headers, pairs(&[("rk", "echo-rk")]));
    assert_eq!(request.baggage, pairs(&[("tenant", "a")]));
}

#[tokio::test]
async fn test_peers_from_custom_scheme() {
    let registry = Arc::new(PeerProviderRegistry::with_defaults());
    registry.register("static", Arc::new(StaticPeers(vec!["10.1.1.1:1", "10.1.1.2:1"])));

    let mut opts = options();
    opts.transport.peers.clear();
    opts.transport.peer_list = Some("static://echo".into());

    let call = Runner::new().with_registry(registry).prepare(&opts).await.unwrap();
    assert_eq!(call.peers, vec!["10.1.1.1:1", "10.1.1.2:1"]);
}

#[tokio::test]
async fn test_peers_from_http_list() {
    let addr = common::start_mock_backend(200, r#"["10.2.2.2:9000"]"#).await;

    let mut opts = options();
    opts.transport.peers.clear();
    opts.transport.peer_list = Some(format!("http://{addr}/echo"));

    let runner = Runner::new().with_registry(Arc::new(PeerProviderRegistry::with_defaults()));
    let call = runner.prepare(&opts).await.unwrap();
    assert_eq!(call.peers, vec!["10.2.2.2:9000"]);
}

#[tokio::test]
async fn test_unsupported_peer_list_scheme() {
    let mut opts = options();
    opts.transport.peers.clear();
    opts.transport.peer_list = Some("zk://cluster/echo".into());

    let runner = Runner::new().with_registry(Arc::new(PeerProviderRegistry::with_defaults()));
    let err = runner.prepare(&opts).await.unwrap_err();
    assert!(matches!(err, CliError::Peers(PeerError::UnsupportedScheme { .. })));
}

#[tokio::test]
async fn test_peer_flags_validated() {
    let runner = Runner::new();

    let mut opts = options();
    opts.transport.peers.clear();
    assert!(matches!(runner.prepare(&opts).await, Err(CliError::MissingPeers)));

    let mut opts = options();
    opts.transport.peer_list = Some("peers.json".into());
    assert!(matches!(runner.prepare(&opts).await, Err(CliError::ConflictingPeers)));
}

#[tokio::test]
async fn test_thrift_uses_external_builder() {
    let mut opts = options();
    opts.request.encoding = Encoding::Thrift;

    let builtin = Runner::new().prepare(&opts).await.unwrap_err();
    assert!(matches!(builtin, CliError::Encoding(EncodingError::SchemaUnsupported(_))));

    let call = Runner::new()
        .with_builders(Arc::new(FakeBuilders))
        .prepare(&opts)
        .await
        .unwrap();
    assert_eq!(call.request.method, "Echo::echo");
}

#[tokio::test]
async fn test_health_rejects_procedure() {
    let mut opts = options();
    opts.request.health = true;

    let runner = Runner::new().with_builders(Arc::new(FakeBuilders));
    let err = runner.prepare(&opts).await.unwrap_err();
    assert!(matches!(err, CliError::Encoding(EncodingError::IncompatibleOptions(_))));

    opts.request.procedure.clear();
    let call = runner.prepare(&opts).await.unwrap();
    assert_eq!(call.request.method, "Meta::health");
}

#[tokio::test]
async fn test_middleware_failure_surfaces() {
    let runner = Runner::new().with_pipeline(RequestPipeline::new().with_middleware(Arc::new(RejectingMiddleware)));
    let err = runner.prepare(&options()).await.unwrap_err();

    assert!(matches!(err, CliError::Middleware(MiddlewareError::Failed(_))));
    assert!(err.to_string().contains("denied"));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mut opts = options();
    opts.request.request_inline = "{not json".into();

    let err = Runner::new().prepare(&opts).await.unwrap_err();
    assert!(matches!(err, CliError::Encoding(EncodingError::InvalidBody { .. })));
}
