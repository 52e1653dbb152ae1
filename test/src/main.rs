mod config;
mod generate;
mod report;

use config::Config;
use kubeapi_client::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse_args();

    init_logging(&config.log_level);

    let seed = config.seed();
    info!(server = %config.server_url, seed, "starting e2e run");

    let client = Client::new(&config.server_url);
    let results = cases::run(&client, &config, seed).await;

    results.print();

    if results.success() {
        Ok(())
    } else {
        std::process::exit(1)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
