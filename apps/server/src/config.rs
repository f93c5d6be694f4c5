use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use debtpilot_core::payoff::PriorityMode;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Default for requests that do not pick a priority mode themselves
    pub priority_mode: PriorityMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid DP_LISTEN_ADDR")?;
        let cors_allow = std::env::var("DP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("DP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let priority_mode = parse_priority_mode(
            &std::env::var("DP_PRIORITY_MODE").unwrap_or_else(|_| "fixed".into()),
        )?;
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            priority_mode,
        })
    }
}

fn parse_priority_mode(value: &str) -> anyhow::Result<PriorityMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fixed" => Ok(PriorityMode::Fixed),
        "rerank" => Ok(PriorityMode::Rerank),
        other => Err(anyhow!(
            "Invalid DP_PRIORITY_MODE '{}': expected 'fixed' or 'rerank'",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_priority_modes() {
        assert_eq!(parse_priority_mode("fixed").unwrap(), PriorityMode::Fixed);
        assert_eq!(parse_priority_mode(" ReRank ").unwrap(), PriorityMode::Rerank);
        assert!(parse_priority_mode("live").is_err());
    }
}
