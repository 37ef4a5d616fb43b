//! Command-line configuration.

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Manage student records against a remote API from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "student-console", version, about, long_about = None)]
pub struct Config {
    /// Root URL every API call is resolved against
    #[arg(long, env = "STUDENT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
