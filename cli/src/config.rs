use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "kubeapi";
const CONFIG_NAME: &str = "config";
const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub server_url: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            output_format: OutputFormat::Table,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format '{}'. Use 'table' or 'json'", value),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
        .map_err(|e| anyhow::anyhow!("Fail determine config path: {}", e))
}

pub fn load_config() -> Result<Config> {
    confy::load(APP_NAME, CONFIG_NAME).map_err(|e| match config_path() {
        Ok(path) => anyhow::anyhow!("Fail load config from {}: {}", path.display(), e),
        Err(path_err) => anyhow::anyhow!("Fail load config: {} ({})", e, path_err),
    })
}

pub fn save_config(config: &Config) -> Result<()> {
    confy::store(APP_NAME, CONFIG_NAME, config).map_err(|e| match config_path() {
        Ok(path) => anyhow::anyhow!("Fail save config to {}: {}", path.display(), e),
        Err(path_err) => anyhow::anyhow!("Fail save config: {} ({})", e, path_err),
    })
}
