mod commands;
mod config;
mod interactive;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{config::ConfigCommand, deployment::DeploymentCommand};
use kubeapi_client::{Client, ClientError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kubeapi")]
#[command(about = "cli for managing deployments on a kubeapi server", long_about = None)]
struct Cli {
    /// Server url (overides config)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Output format (table or json)
    #[arg(long, global = true, value_parser = ["table", "json"])]
    output: Option<String>,

    /// Log level, RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    Deployment {
        #[command(subcommand)]
        command: DeploymentCommand,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}\n{:#}", "Error:".red().bold(), err);
        if let Some(api) = err.downcast_ref::<ClientError>().and_then(ClientError::api) {
            output::print_api_error(api);
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match &cli.command {
        Command::Config { command } => command.clone().execute(),
        Command::Deployment { command } => {
            let (client, output_format) = setup_client_and_format(&cli)?;
            command.clone().execute(&client, &output_format).await
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn setup_client_and_format(cli: &Cli) -> Result<(Client, config::OutputFormat)> {
    let cfg = config::load_config().context("Fail to load config")?;

    let server_url = cli.server.as_ref().unwrap_or(&cfg.server_url);
    let client = Client::new(server_url);

    let output_format = cli
        .output
        .as_deref()
        .map(|fmt| match fmt {
            "json" => config::OutputFormat::Json,
            _ => config::OutputFormat::Table,
        })
        .unwrap_or(cfg.output_format);

    Ok((client, output_format))
}
