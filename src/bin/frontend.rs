use std::sync::Arc;

use clap::Parser;

use hostname_relay::config::{load_config, ServiceArgs, ServiceRole, UpstreamArgs};
use hostname_relay::frontend::{self, BackendClient};
use hostname_relay::observability::logging;
use hostname_relay::{hostname, lifecycle};

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Frontend demo service: relays the backend's host name next to its own", long_about = None)]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,

    #[command(flatten)]
    upstream: UpstreamArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let role = ServiceRole::Frontend;

    let config = load_config(
        role,
        cli.service.config.as_deref(),
        &cli.service.overrides(Some(&cli.upstream)),
    )?;
    logging::init_logging(&config.observability)?;

    let hostname: Arc<str> = Arc::from(hostname::hostname());
    let client = BackendClient::from_config(&config.upstream)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        hostname = %hostname,
        backend_url = %client.url(),
        timeout_secs = config.upstream.timeout_secs,
        "frontend starting"
    );

    lifecycle::serve(role, frontend::router(hostname, client), &config).await?;
    Ok(())
}
