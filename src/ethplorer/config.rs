use std::time::Duration;

use crate::entity::Address;

pub const DEFAULT_BASE_URL: &str = "https://api.ethplorer.io/";
pub const DEFAULT_API_KEY: &str = "freekey";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Ethplorer client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, always ending with `/`
    pub base_url: String,

    /// API key sent as the `apiKey` query parameter
    pub api_key: String,

    /// Upper bound for a single request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            DEFAULT_API_KEY,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

impl Config {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Self {
            base_url,
            api_key: api_key.to_string(),
            timeout,
        }
    }

    /// URL of the `getAddressInfo` endpoint for an address, without the key.
    pub fn address_info_url(&self, address: &Address) -> String {
        format!("{}getAddressInfo/{}/", self.base_url, address)
    }
}
