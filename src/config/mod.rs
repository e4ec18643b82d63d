use serde::{self, Deserialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Current AWS region.
    pub aws_region: String,

    /// Maximum level written to the log sink (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default = "default_localstack_test_mode_endpoint")]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl GlobalConfig {
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO)
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_localstack_test_mode_endpoint() -> Option<String> {
    None
}
