use anyhow::{Context, Result};
use clap::Subcommand;
use kubeapi_client::Client;
use kubeapi_types::{CreateDeployment, Port};
use std::path::PathBuf;

use crate::{config::OutputFormat, interactive, output};

#[derive(Subcommand, Clone)]
pub enum DeploymentCommand {
    Create {
        #[arg(short, long)]
        interactive: bool,

        /// Deployment definition from JSON file (use '-' for stdin)
        #[arg(long, value_name = "FILE")]
        from_json: Option<PathBuf>,

        /// Deployment id, generated when omitted
        #[arg(long)]
        id: Option<String>,

        #[arg(long, required_unless_present_any = ["interactive", "from_json"])]
        image: Option<String>,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        replicas: i32,

        /// Named port as NAME=PORT, repeatable
        #[arg(long = "port", value_name = "NAME=PORT", value_parser = parse_port)]
        ports: Vec<Port>,

        /// Label as KEY=VALUE, repeatable
        #[arg(long = "label", value_name = "KEY=VALUE", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },
    Get {
        #[arg(short, long)]
        interactive: bool,

        #[arg(required_unless_present = "interactive")]
        id: Option<String>,
    },
    Delete {
        #[arg(short, long)]
        interactive: bool,

        #[arg(required_unless_present = "interactive")]
        id: Option<String>,
    },
}

impl DeploymentCommand {
    pub async fn execute(self, client: &Client, output_format: &OutputFormat) -> Result<()> {
        match self {
            DeploymentCommand::Create {
                interactive,
                from_json,
                id,
                image,
                replicas,
                ports,
                labels,
            } => {
                let request = if interactive {
                    interactive::prompt_create_deployment()?
                } else if let Some(path) = from_json {
                    load_from_json(&path)?
                } else {
                    CreateDeployment {
                        id,
                        replicas,
                        image: image.unwrap_or_default(),
                        ports,
                        labels: labels.into_iter().collect(),
                    }
                };

                let created = client
                    .create_deployment(request)
                    .await
                    .context("Fail create deployment")?;
                output::print_created(created, output_format)?;
            }
            DeploymentCommand::Get { interactive, id } => {
                let id = resolve_id(interactive, id)?;
                let deployment = client
                    .get_deployment(&id)
                    .await
                    .with_context(|| format!("Fail get deployment {}", id))?;
                output::print_deployment(deployment, output_format)?;
            }
            DeploymentCommand::Delete { interactive, id } => {
                let id = resolve_id(interactive, id)?;
                client
                    .delete_deployment(&id)
                    .await
                    .with_context(|| format!("Fail delete deployment {}", id))?;
                output::print_deleted(&id, output_format)?;
            }
        }
        Ok(())
    }
}

fn resolve_id(interactive: bool, id: Option<String>) -> Result<String> {
    match id {
        Some(id) if !interactive => Ok(id),
        _ => interactive::prompt_deployment_id(),
    }
}

fn load_from_json(path: &PathBuf) -> Result<CreateDeployment> {
    let content = if path.to_str() == Some("-") {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    serde_json::from_str(&content).context("Fail parse json")
}

pub fn parse_port(value: &str) -> Result<Port, String> {
    let (name, port) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PORT, got '{}'", value))?;
    let port = port
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid port '{}': {}", port, e))?;
    Ok(Port::new(name.trim(), port))
}

pub fn parse_label(value: &str) -> Result<(String, String), String> {
    let (key, val) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", value))?;
    if key.trim().is_empty() {
        return Err(format!("empty label key in '{}'", value));
    }
    Ok((key.trim().to_string(), val.trim().to_string()))
}
