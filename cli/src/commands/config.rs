use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::config::{config_path, load_config, save_config, Config, OutputFormat};

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    Show,
    /// Print the location of the config file
    Path,
    Set {
        #[arg(value_enum)]
        key: ConfigKey,
        value: String,
    },
    Get {
        #[arg(value_enum)]
        key: ConfigKey,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ConfigKey {
    ServerUrl,
    OutputFormat,
}

impl ConfigKey {
    fn name(self) -> &'static str {
        match self {
            ConfigKey::ServerUrl => "server_url",
            ConfigKey::OutputFormat => "output_format",
        }
    }

    fn read(self, cfg: &Config) -> String {
        match self {
            ConfigKey::ServerUrl => cfg.server_url.clone(),
            ConfigKey::OutputFormat => format!("{:?}", cfg.output_format),
        }
    }

    fn write(self, cfg: &mut Config, value: &str) -> Result<()> {
        match self {
            ConfigKey::ServerUrl => cfg.server_url = value.trim_end_matches('/').to_string(),
            ConfigKey::OutputFormat => cfg.output_format = OutputFormat::parse(value)?,
        }
        Ok(())
    }
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Show => {
                let cfg = load_config()?;
                println!("{}", "Current configuration:".blue().bold());
                for key in [ConfigKey::ServerUrl, ConfigKey::OutputFormat] {
                    println!("  {}: {}", key.name(), key.read(&cfg));
                }
            }
            ConfigCommand::Path => println!("{}", config_path()?.display()),
            ConfigCommand::Set { key, value } => {
                let mut cfg = load_config()?;
                key.write(&mut cfg, &value)?;
                save_config(&cfg)?;
                println!("{} {} = {}", "Set".green(), key.name(), key.read(&cfg));
            }
            ConfigCommand::Get { key } => {
                let cfg = load_config()?;
                println!("{}", key.read(&cfg));
            }
        }
        Ok(())
    }
}
