use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::entity::{Address, WalletError, WalletSnapshot};
use crate::ethplorer::{is_spam_token, parse_native_token, parse_token, WalletFetcher};
use crate::utils::format_amount;

#[async_trait]
pub trait WalletInteractor: Send + Sync {
    async fn get_wallet_data(&self, address: &str) -> Result<WalletSnapshot, WalletError>;
}

pub struct WalletInteractorImpl {
    wallet_fetcher: Arc<dyn WalletFetcher + Send + Sync>,
}

impl WalletInteractorImpl {
    pub fn new(wallet_fetcher: Arc<dyn WalletFetcher + Send + Sync>) -> Self {
        Self { wallet_fetcher }
    }
}

#[async_trait]
impl WalletInteractor for WalletInteractorImpl {
    async fn get_wallet_data(&self, address: &str) -> Result<WalletSnapshot, WalletError> {
        let address: Address = address.parse()?;

        let response = self.wallet_fetcher.fetch_address_info(&address).await?;

        parse_wallet_data(&address, &response)
    }
}

/// Turn a raw `getAddressInfo` document into a snapshot.
///
/// The native asset must parse; spam tokens are dropped and malformed tokens
/// are logged and skipped. The total covers every token that made it in.
pub fn parse_wallet_data(
    address: &Address,
    response: &Value,
) -> Result<WalletSnapshot, WalletError> {
    let native = parse_native_token(response.get("ETH"))?;

    let mut total_usd = native.raw_usd_value;
    let mut tokens = vec![native];
    let mut spam_filtered = 0;
    let mut malformed_skipped = 0;

    let records = response
        .get("tokens")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for record in records {
        if is_spam_token(record) {
            spam_filtered += 1;
            continue;
        }

        match parse_token(record) {
            Ok(token) => {
                total_usd += token.raw_usd_value;
                tokens.push(token);
            }
            Err(e) => {
                warn!("Skipping token for {}: {}", address, e);
                malformed_skipped += 1;
            }
        }
    }

    let total_usd_value = format_amount(total_usd);

    debug!("Dropped {} spam token(s) for {}", spam_filtered, address);
    info!(
        "Parsed {} token(s) for {}, total ${}",
        tokens.len(),
        address,
        total_usd_value
    );

    Ok(WalletSnapshot {
        address: address.to_string(),
        tokens,
        total_usd_value,
        spam_filtered,
        malformed_skipped,
    })
}
