use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kubeapi-test")]
#[command(about = "E2E test for a kubeapi deployment server")]
pub struct Config {
    #[arg(long, default_value = "http://localhost:3000")]
    pub server_url: String,

    /// Number of random valid deployments to create
    #[arg(long, default_value = "10")]
    pub samples: usize,

    /// Seed for generated deployments, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only run cases whose name contains this string
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long, default_value = "false")]
    pub skip_cleanup: bool,

    /// Log level, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn selects(&self, case: &str) -> bool {
        self.filter
            .as_deref()
            .map(|f| case.contains(f))
            .unwrap_or(true)
    }
}
