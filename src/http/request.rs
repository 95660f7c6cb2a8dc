//! Outgoing request construction.
//!
//! # Responsibilities
//! - Resolve the request path against the configured endpoint
//! - Attach user headers and body
//! - Attach the cluster hint the router reads

use http::header::{HeaderName, HeaderValue};
use http::{Method, Request, Uri};
use http_body_util::Full;
use hyper::body::Bytes;
use url::Url;

use crate::http::ClientError;
use crate::routing::ClusterContextExt;

/// Description of one request to send.
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    pub method: Method,
    /// Path (and optional query) relative to the endpoint.
    pub path: String,
    pub cluster: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl RequestSpec {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Build the `http::Request` addressed to `endpoint`.
    pub fn build(&self, endpoint: &str) -> Result<Request<Full<Bytes>>, ClientError> {
        let url = Url::parse(endpoint)?.join(&self.path)?;
        let uri: Uri = url.as_str().parse().map_err(http::Error::from)?;

        let mut builder = Request::builder().method(self.method.clone()).uri(uri);
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(http::Error::from)?;
            let value = HeaderValue::from_str(value.trim()).map_err(http::Error::from)?;
            builder = builder.header(name, value);
        }

        let mut request = builder.body(Full::new(self.body.clone()))?;
        if let Some(cluster) = &self.cluster {
            request.set_cluster(cluster.clone());
        }
        Ok(request)
    }
}

/// Parse a `Name: value` header argument.
pub fn parse_header(raw: &str) -> Result<(String, String), ClientError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ClientError::InvalidHeader(raw.to_string())),
    }
}
