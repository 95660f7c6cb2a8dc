//! Construction-time router settings.

use std::str::FromStr;
use std::sync::Arc;

use http::header::HeaderValue;
use http::uri::Authority;

use crate::routing::ClusterFilter;
use crate::transport::error::InvalidHost;

/// Settings shared read-only by every clone of a router.
#[derive(Clone)]
pub struct RouterSettings {
    /// Forward requests without a cluster hint unchanged.
    pub fallback: bool,
    /// Replaces the target host of rewritten requests.
    pub host: Option<HostOverride>,
    /// When set and it rejects a cluster, the request is sent unchanged.
    pub filter: Option<Arc<dyn ClusterFilter>>,
}

impl RouterSettings {
    pub fn new(fallback: bool) -> Self {
        Self {
            fallback,
            host: None,
            filter: None,
        }
    }

    /// Apply options in order; later options win.
    pub fn with_options(mut self, options: impl IntoIterator<Item = RouterOption>) -> Self {
        for option in options {
            option.apply_to(&mut self);
        }
        self
    }

    /// Whether requests for `cluster` are rewritten.
    pub fn proxies(&self, cluster: &str) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter.accepts(cluster))
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self::new(true)
    }
}

impl std::fmt::Debug for RouterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterSettings")
            .field("fallback", &self.fallback)
            .field("host", &self.host.as_ref().map(HostOverride::as_str))
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// A validated `host[:port]`, ready for both the URI and the `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverride {
    authority: Authority,
    header: HeaderValue,
}

impl HostOverride {
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    pub fn header(&self) -> &HeaderValue {
        &self.header
    }

    pub fn as_str(&self) -> &str {
        self.authority.as_str()
    }
}

impl FromStr for HostOverride {
    type Err = InvalidHost;

    fn from_str(host: &str) -> Result<Self, Self::Err> {
        let invalid = |source: http::Error| InvalidHost {
            host: host.to_string(),
            source,
        };
        let authority: Authority = host.parse().map_err(|e: http::uri::InvalidUri| invalid(e.into()))?;
        let header = HeaderValue::from_str(authority.as_str())
            .map_err(|e| invalid(e.into()))?;
        Ok(Self { authority, header })
    }
}

/// A single modification to [`RouterSettings`], applied at construction.
#[derive(Clone)]
pub enum RouterOption {
    /// Send rewritten requests to this host.
    Host(HostOverride),
    /// Only rewrite requests for clusters the filter accepts.
    Filter(Arc<dyn ClusterFilter>),
}

impl RouterOption {
    /// Parse `host[:port]` now so rewriting never has to.
    pub fn host(host: &str) -> Result<Self, InvalidHost> {
        Ok(RouterOption::Host(host.parse()?))
    }

    pub fn filter(filter: impl ClusterFilter + 'static) -> Self {
        RouterOption::Filter(Arc::new(filter))
    }

    pub fn apply_to(self, settings: &mut RouterSettings) {
        match self {
            RouterOption::Host(host) => settings.host = Some(host),
            RouterOption::Filter(filter) => settings.filter = Some(filter),
        }
    }
}

impl std::fmt::Debug for RouterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterOption::Host(host) => f.debug_tuple("Host").field(&host.as_str()).finish(),
            RouterOption::Filter(_) => f.write_str("Filter(..)"),
        }
    }
}
