use clap::Parser;

/// Football match outcome predictor service
#[derive(Parser, Debug, Clone)]
#[command(name = "match-predictor", version, about)]
pub struct Config {
    /// Resolve predictions with the local mock formula instead of the remote endpoint
    #[arg(long, env = "USE_MOCK", default_value = "true")]
    pub use_mock: bool,

    /// Base URL of the remote scoring endpoint
    #[arg(long, env = "SCORING_API_URL", default_value = "http://127.0.0.1:8000")]
    pub scoring_api_url: String,

    /// HTTP listen address for the predictor page and API
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Timeout in seconds for outbound scoring requests
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = self.scoring_api_url.trim();
        if url.is_empty() {
            anyhow::bail!("SCORING_API_URL must not be empty");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("SCORING_API_URL must be an http(s) URL, got '{}'", url);
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        Ok(())
    }
}
