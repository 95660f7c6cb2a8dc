//! The cluster gateway router.
//!
//! # Responsibilities
//! - Read the cluster hint from each outgoing request
//! - Pass through, reject, or rewrite to the gateway proxy path
//! - Hand the result to the delegate transport exactly once
//!
//! # Design Decisions
//! - Settings frozen behind `Arc` at construction (lock-free sharing)
//! - The request is owned by the router once called; the rewrite rebuilds
//!   its URI from fresh parts and keeps its extensions
//! - Delegate results are returned as-is; status codes are never inspected

use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::{self, Either, MapErr, Ready, TryFutureExt};
use http::header::{HeaderValue, HOST};
use http::uri::PathAndQuery;
use http::{Request, Uri};
use tower::Service;

use crate::routing::{cluster_context, format_proxy_path};
use crate::transport::error::{RoutingError, RoutingResult};
use crate::transport::options::{RouterOption, RouterSettings};

/// Future returned by [`ClusterGatewayTransport`].
pub type ResponseFuture<F, T, E> =
    Either<MapErr<F, fn(E) -> RoutingError<E>>, Ready<Result<T, RoutingError<E>>>>;

/// Routes requests carrying a cluster hint through the cluster gateway.
#[derive(Debug, Clone)]
pub struct ClusterGatewayTransport<S> {
    delegate: S,
    settings: Arc<RouterSettings>,
}

impl<S> ClusterGatewayTransport<S> {
    /// Router that forwards requests without a cluster hint unchanged.
    pub fn new(delegate: S) -> Self {
        Self::strict(delegate, true)
    }

    /// Router with an explicit policy for requests without a cluster hint.
    pub fn strict(delegate: S, fallback: bool) -> Self {
        Self::with_options(delegate, fallback, [])
    }

    /// Router with an explicit fallback policy and options applied in order.
    pub fn with_options(
        delegate: S,
        fallback: bool,
        options: impl IntoIterator<Item = RouterOption>,
    ) -> Self {
        Self::from_settings(delegate, Arc::new(RouterSettings::new(fallback).with_options(options)))
    }

    pub(crate) fn from_settings(delegate: S, settings: Arc<RouterSettings>) -> Self {
        Self { delegate, settings }
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }
}

/// Decide what to send for `request`: the request itself, its gateway
/// rewrite, or an error if it must not be sent at all.
fn prepare<B, E>(settings: &RouterSettings, request: Request<B>) -> RoutingResult<Request<B>, E> {
    let Some(cluster) = cluster_context(&request).map(str::to_owned) else {
        if !settings.fallback {
            return Err(RoutingError::MissingClusterContext);
        }
        tracing::trace!(uri = %request.uri(), "No cluster context, sending unchanged");
        return Ok(request);
    };

    if !settings.proxies(&cluster) {
        tracing::trace!(cluster = %cluster, "Cluster filtered out, sending unchanged");
        return Ok(request);
    }

    Ok(rewrite(settings, &cluster, request))
}

fn rewrite<B>(settings: &RouterSettings, cluster: &str, request: Request<B>) -> Request<B> {
    let (mut parts, body) = request.into_parts();

    let path = format_proxy_path(cluster, parts.uri.path());
    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut uri_parts = std::mem::take(&mut parts.uri).into_parts();
    // The path is percent-encoded and the query came from a parsed URI.
    uri_parts.path_and_query =
        Some(PathAndQuery::try_from(path_and_query).expect("encoded proxy path is a valid path"));

    // Authority-form targets become origin-form; keep the target in Host.
    if uri_parts.scheme.is_none() {
        if let Some(authority) = uri_parts.authority.take() {
            if let Ok(value) = HeaderValue::from_str(authority.as_str()) {
                parts.headers.entry(HOST).or_insert(value);
            }
        }
    }

    if let Some(host) = &settings.host {
        // Origin-form URIs carry no authority; the Host header covers them.
        if uri_parts.scheme.is_some() {
            uri_parts.authority = Some(host.authority().clone());
        }
        parts.headers.insert(HOST, host.header().clone());
    }

    parts.uri = Uri::from_parts(uri_parts).expect("scheme and authority are set together");
    tracing::trace!(cluster = %cluster, uri = %parts.uri, "Routing through cluster gateway");
    Request::from_parts(parts, body)
}

impl<S, B> Service<Request<B>> for ClusterGatewayTransport<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = RoutingError<S::Error>;
    type Future = ResponseFuture<S::Future, S::Response, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.delegate.poll_ready(cx).map_err(RoutingError::Transport)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        match prepare(&self.settings, request) {
            Ok(request) => {
                let wrap: fn(S::Error) -> RoutingError<S::Error> = RoutingError::Transport;
                Either::Left(self.delegate.call(request).map_err(wrap))
            }
            Err(err) => Either::Right(future::ready(Err(err))),
        }
    }
}
