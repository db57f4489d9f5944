use std::sync::Arc;

use clap::Parser;

use hostname_relay::config::{load_config, ServiceArgs, ServiceRole};
use hostname_relay::observability::logging;
use hostname_relay::{backend, hostname, lifecycle};

#[derive(Parser)]
#[command(name = "backend")]
#[command(about = "Backend demo service: answers /health and reports its host name on /info", long_about = None)]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let role = ServiceRole::Backend;

    let config = load_config(role, cli.service.config.as_deref(), &cli.service.overrides(None))?;
    logging::init_logging(&config.observability)?;

    let hostname: Arc<str> = Arc::from(hostname::hostname());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        hostname = %hostname,
        "backend starting"
    );

    lifecycle::serve(role, backend::router(hostname), &config).await?;
    Ok(())
}
