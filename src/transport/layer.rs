//! Tower layer that wraps a delegate transport in the cluster router.

use std::sync::Arc;

use tower::Layer;

use crate::transport::options::{RouterOption, RouterSettings};
use crate::transport::round_tripper::ClusterGatewayTransport;

/// Wraps services in [`ClusterGatewayTransport`], sharing one frozen
/// settings value between every wrapped service.
#[derive(Debug, Clone)]
pub struct ClusterGatewayLayer {
    settings: Arc<RouterSettings>,
}

impl ClusterGatewayLayer {
    /// Layer with fallback enabled and `options` applied in order.
    pub fn new(options: impl IntoIterator<Item = RouterOption>) -> Self {
        Self::strict(true, options)
    }

    /// Layer with an explicit fallback policy.
    pub fn strict(fallback: bool, options: impl IntoIterator<Item = RouterOption>) -> Self {
        Self {
            settings: Arc::new(RouterSettings::new(fallback).with_options(options)),
        }
    }
}

impl<S> Layer<S> for ClusterGatewayLayer {
    type Service = ClusterGatewayTransport<S>;

    fn layer(&self, delegate: S) -> Self::Service {
        ClusterGatewayTransport::from_settings(delegate, self.settings.clone())
    }
}
