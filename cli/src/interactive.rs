use anyhow::{anyhow, Result};
use inquire::{CustomType, Text};
use kubeapi_types::{CreateDeployment, Labels, Port};

use crate::commands::deployment::{parse_label, parse_port};

pub fn prompt_create_deployment() -> Result<CreateDeployment> {
    let id = Text::new("Deployment id (optional):")
        .with_help_message("Press Enter to generate one")
        .prompt_skippable()?
        .filter(|s| !s.trim().is_empty());

    let image = Text::new("Image:").prompt()?;

    let replicas = CustomType::<i32>::new("Replicas:")
        .with_default(1)
        .with_error_message("Please type a whole number")
        .prompt()?;

    let ports = Text::new("Ports:")
        .with_help_message("Comma separated NAME=PORT (e.g. http=80,api=3000)")
        .prompt()?;
    let ports = split_list(&ports)
        .map(parse_port)
        .collect::<Result<Vec<Port>, String>>()
        .map_err(|e| anyhow!(e))?;

    let labels = Text::new("Labels (optional):")
        .with_help_message("Comma separated KEY=VALUE. Press Enter to skip")
        .prompt_skippable()?
        .unwrap_or_default();
    let labels = split_list(&labels)
        .map(parse_label)
        .collect::<Result<Labels, String>>()
        .map_err(|e| anyhow!(e))?;

    Ok(CreateDeployment {
        id,
        replicas,
        image,
        ports,
        labels,
    })
}

pub fn prompt_deployment_id() -> Result<String> {
    let id = Text::new("Deployment id:").prompt()?;
    Ok(id.trim().to_string())
}

fn split_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty())
}
