//! gateway-curl: send one request to a cluster through the cluster gateway.
//!
//! ```text
//! gateway-curl --config gateway.toml --cluster cluster-a /api/v1/namespaces/default/pods
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use http::Method;

use cluster_gateway_transport::config::{self, validation::validate_config, ConfigError, GatewayClientConfig};
use cluster_gateway_transport::http::{build_service, execute, http_client, parse_header, RequestSpec};
use cluster_gateway_transport::observability::init_logging;

#[derive(Parser)]
#[command(name = "gateway-curl")]
#[command(about = "Send HTTP requests to managed clusters through the cluster gateway", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint fronting the gateway (overrides gateway.endpoint).
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Cluster to address; omitted means the hosting cluster.
    #[arg(long)]
    cluster: Option<String>,

    /// Send proxied requests to this host[:port] instead.
    #[arg(long)]
    host_override: Option<String>,

    /// Fail requests that name no cluster instead of sending them directly.
    #[arg(long)]
    strict: bool,

    #[arg(short = 'X', long, default_value = "GET")]
    method: Method,

    /// Extra header, "Name: value". Repeatable.
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Request body.
    #[arg(short, long)]
    data: Option<String>,

    /// Request path, e.g. /api/v1/pods.
    path: String,
}

impl Cli {
    fn load_config(&self) -> Result<GatewayClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => GatewayClientConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.gateway.endpoint = endpoint.clone();
        }
        if let Some(host) = &self.host_override {
            config.gateway.host_override = Some(host.clone());
        }
        if self.strict {
            config.routing.fallback = false;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&config.observability)?;

    tracing::info!(
        endpoint = %config.gateway.endpoint,
        cluster = cli.cluster.as_deref().unwrap_or("<none>"),
        fallback = config.routing.fallback,
        host_override = config.gateway.host_override.as_deref().unwrap_or("<none>"),
        "Configuration loaded"
    );

    let mut spec = RequestSpec {
        method: cli.method.clone(),
        path: cli.path.clone(),
        cluster: cli.cluster.clone(),
        body: cli.data.clone().unwrap_or_default().into(),
        ..RequestSpec::default()
    };
    for raw in &cli.headers {
        spec.headers.push(parse_header(raw)?);
    }

    let request = spec.build(&config.gateway.endpoint)?;
    let service = build_service(http_client(), &config)?;
    let timeout = Duration::from_secs(config.timeouts.request_secs);

    let response = match execute(service, request, timeout).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            return Err(e.into());
        }
    };

    eprintln!("{}", response.status);
    println!("{}", response.render_body());

    if response.status.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
