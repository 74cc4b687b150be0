use std::env;
use std::time::Duration;

use redlist_api::RedListClient;

use crate::error::{GatewayError, Result};
use crate::gateway::{GatewayConfig, DEFAULT_MEASURE_FETCH_LIMIT};

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub api_token: String,
    pub timeout_secs: u64,
    pub measure_fetch_limit: usize,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3005);

        let api_url =
            var("REDLIST_API_URL").unwrap_or_else(|| RedListClient::DEFAULT_BASE_URL.to_string());

        let api_token = var("REDLIST_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GatewayError::Config("REDLIST_API_TOKEN is not set".into()))?;

        let timeout_secs = var("REDLIST_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let measure_fetch_limit = var("MEASURE_FETCH_LIMIT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MEASURE_FETCH_LIMIT);

        Ok(Self {
            port,
            api_url,
            api_token,
            timeout_secs,
            measure_fetch_limit,
        })
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            api_url: self.api_url.clone(),
            token: self.api_token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            measure_fetch_limit: self.measure_fetch_limit,
        }
    }
}
