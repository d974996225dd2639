use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::ethplorer::config::{
    Config as EthplorerConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

pub const SETTINGS_FILE: &str = "wallet_viewer";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Application settings.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `wallet_viewer.{toml,yaml,json}` file, then environment variables
/// (`ETH_BASE_URL`, `API_KEY`, `REQUEST_TIMEOUT_SECS`, `BIND_ADDRESS`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub eth_base_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub bind_address: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::builder()?
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("eth_base_url", DEFAULT_BASE_URL)?
            .set_default("api_key", DEFAULT_API_KEY)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?)
    }

    pub fn ethplorer_config(&self) -> EthplorerConfig {
        EthplorerConfig::new(
            &self.eth_base_url,
            &self.api_key,
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}
