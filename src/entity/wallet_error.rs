#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalletError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Wallet data unavailable: {0}")]
    FetchUnavailable(String),

    #[error("Malformed native asset record: {0}")]
    MalformedNativeAsset(String),

    #[error("Malformed token record: {0}")]
    MalformedToken(String),
}

impl WalletError {
    /// Errors the user sees as "no data available".
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            WalletError::FetchUnavailable(_) | WalletError::MalformedNativeAsset(_)
        )
    }
}
