use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;

use crate::entity::{Address, WalletError};
use crate::ethplorer::Config;

/// Source of raw `getAddressInfo` payloads
#[async_trait]
pub trait WalletFetcher: Send + Sync {
    /// Fetch the raw address info document. Any transport, status or
    /// decoding problem is reported as `WalletError::FetchUnavailable`.
    async fn fetch_address_info(&self, address: &Address) -> Result<Value, WalletError>;
}

/// Fetcher backed by the Ethplorer HTTP API
pub struct EthplorerWalletFetcher {
    http_client: Client,
    config: Config,
}

impl EthplorerWalletFetcher {
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build Ethplorer HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl WalletFetcher for EthplorerWalletFetcher {
    async fn fetch_address_info(&self, address: &Address) -> Result<Value, WalletError> {
        let url = self.config.address_info_url(address);
        debug!("Requesting address info for {}", address);

        // reqwest errors carry the full URL, which includes the API key
        let response = self
            .http_client
            .get(&url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Ethplorer request for {} failed: {}", address, e);
                WalletError::FetchUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                "Ethplorer API error for {}: {} {}",
                address, status, error_text
            );
            return Err(WalletError::FetchUnavailable(format!(
                "provider returned {}",
                status
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to decode Ethplorer response for {}: {}", address, e);
            WalletError::FetchUnavailable(e.to_string())
        })?;

        if let Some(api_error) = body.get("error") {
            error!("Ethplorer API error for {}: {}", address, api_error);
            return Err(WalletError::FetchUnavailable(api_error.to_string()));
        }

        if !body.is_object() {
            error!("Unexpected Ethplorer response shape for {}", address);
            return Err(WalletError::FetchUnavailable(
                "response is not a JSON object".to_string(),
            ));
        }

        info!("Fetched address info for {} ({})", address, status);
        Ok(body)
    }
}
