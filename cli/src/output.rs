use anyhow::Result;
use colored::Colorize;
use comfy_table::{
    modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS},
    presets::UTF8_FULL,
    Cell, Color, Table,
};
use kubeapi_client::ApiError;
use kubeapi_types::Deployment;
use serde::Serialize;

use crate::config::OutputFormat;

pub fn print_created(deployment: Deployment, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", "Deployment created successfully!".green());
            print_deployment_table(deployment)
        }
        OutputFormat::Json => print_json(&deployment),
    }
}

pub fn print_deployment(deployment: Deployment, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_deployment_table(deployment),
        OutputFormat::Json => print_json(&deployment),
    }
}

pub fn print_deleted(id: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{} {}", "Deleted deployment".green(), id);
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "id": id, "deleted": true })),
    }
}

pub fn print_api_error(err: &ApiError) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("HTTP STATUS").fg(Color::Red),
        Cell::new("CODE").fg(Color::Red),
        Cell::new("MESSAGE").fg(Color::Red),
        Cell::new("FAILED FIELDS").fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new(err.status()),
        Cell::new(err.code()),
        Cell::new(err.message()),
        Cell::new(err.failed_fields().map(|f| f.join(", ")).unwrap_or_default()),
    ]);
    eprintln!("{table}");
}

fn print_deployment_table(deployment: Deployment) -> Result<()> {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("ID").fg(Color::Blue),
        Cell::new("IMAGE").fg(Color::Blue),
        Cell::new("REPLICAS").fg(Color::Blue),
        Cell::new("PORTS").fg(Color::Blue),
        Cell::new("LABELS").fg(Color::Blue),
        Cell::new("CREATED").fg(Color::Blue),
    ]);

    let ports = deployment
        .ports
        .iter()
        .map(|p| format!("{}:{}", p.name, p.port))
        .collect::<Vec<_>>()
        .join("\n");

    let mut labels = deployment
        .labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>();
    labels.sort();

    table.add_row(vec![
        Cell::new(&deployment.id),
        Cell::new(&deployment.image),
        Cell::new(deployment.replicas),
        Cell::new(ports),
        Cell::new(labels.join("\n")),
        Cell::new(
            deployment
                .create_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        ),
    ]);

    println!("{table}");
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS);
    table
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
