//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, HeaderMap, Method, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use cluster_gateway_transport::http::{build_service, execute, http_client, FetchedResponse, RequestSpec};
use cluster_gateway_transport::GatewayClientConfig;

/// Start a mock gateway that echoes what it received as JSON.
pub async fn start_mock_gateway() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> Json<Value> {
    let get = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "host": get(header::HOST),
        "user_agent": get(header::USER_AGENT),
        "request_id": get(header::HeaderName::from_static("x-request-id")),
    }))
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Config pointing at `addr`.
pub fn config_for(addr: SocketAddr) -> GatewayClientConfig {
    let mut config = GatewayClientConfig::default();
    config.gateway.endpoint = format!("http://{addr}");
    config
}

/// Send `spec` through the full client stack.
pub async fn send(
    config: &GatewayClientConfig,
    spec: RequestSpec,
) -> Result<FetchedResponse, cluster_gateway_transport::http::ClientError> {
    let request = spec.build(&config.gateway.endpoint)?;
    let service = build_service(http_client(), config)?;
    execute(service, request, Duration::from_secs(5)).await
}

/// Decode the mock gateway's echo.
pub fn echoed(response: &FetchedResponse) -> Value {
    serde_json::from_slice(&response.body).unwrap()
}
