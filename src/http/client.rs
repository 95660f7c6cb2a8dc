//! Client stack for talking to clusters through the gateway.
//!
//! # Layers (outermost first)
//! ```text
//! SetRequestId (x-request-id, UUID v4)
//!     → ClusterGatewayTransport (rewrite to gateway proxy path)
//!     → TraceLayer (span per request, sees the rewritten URI)
//!     → SetRequestHeader (user-agent, if not present)
//!     → hyper_util legacy Client
//! ```

use std::fmt::Display;
use std::time::Duration;

use http::header::{HeaderValue, USER_AGENT};
use http::{Request, Response};
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tower::util::BoxCloneService;
use tower::{Service, ServiceBuilder, ServiceExt};
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::set_header::SetRequestHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayClientConfig;
use crate::http::response::FetchedResponse;
use crate::http::{BoxError, ClientError};
use crate::transport::ClusterGatewayLayer;

/// Plain HTTP/1.1 + HTTP/2 client used as the delegate transport.
pub type HttpClient = Client<HttpConnector, Full<Bytes>>;

/// Boxed response body produced by [`GatewayService`].
pub type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

/// The full client stack with the router in place.
pub type GatewayService = BoxCloneService<Request<Full<Bytes>>, Response<ResponseBody>, BoxError>;

const DEFAULT_USER_AGENT: &str = concat!("gateway-curl/", env!("CARGO_PKG_VERSION"));

/// Create the delegate client.
pub fn http_client() -> HttpClient {
    Client::builder(TokioExecutor::new()).build_http()
}

/// Wrap `delegate` in the router and the tracing/request-id layers.
pub fn build_service<S, ResBody>(
    delegate: S,
    config: &GatewayClientConfig,
) -> Result<GatewayService, ClientError>
where
    S: Service<Request<Full<Bytes>>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::error::Error + Send + Sync + 'static,
    ResBody: Body<Data = Bytes> + Send + 'static,
    ResBody::Error: Into<BoxError> + Display + 'static,
{
    let router = ClusterGatewayLayer::strict(config.routing.fallback, config.router_options()?);

    let service = ServiceBuilder::new()
        .map_response(box_body)
        .map_err(box_error)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(router)
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestHeaderLayer::if_not_present(
            USER_AGENT,
            HeaderValue::from_static(DEFAULT_USER_AGENT),
        ))
        .service(delegate);

    Ok(BoxCloneService::new(service))
}

fn box_body<B>(response: Response<B>) -> Response<ResponseBody>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    response.map(|body| body.map_err(Into::into).boxed_unsync())
}

fn box_error<E>(err: E) -> BoxError
where
    E: std::error::Error + Send + Sync + 'static,
{
    Box::new(err)
}

/// Send one request and buffer the whole response, bounded by `timeout`.
pub async fn execute(
    service: GatewayService,
    request: Request<Full<Bytes>>,
    timeout: Duration,
) -> Result<FetchedResponse, ClientError> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = tokio::time::timeout(timeout, service.oneshot(request))
        .await
        .map_err(|_| ClientError::Timeout(timeout))?
        .map_err(ClientError::Request)?;

    tracing::debug!(method = %method, uri = %uri, status = %response.status(), "Response received");

    let (parts, body) = response.into_parts();
    let body = body.collect().await.map_err(ClientError::Body)?.to_bytes();
    Ok(FetchedResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    })
}
