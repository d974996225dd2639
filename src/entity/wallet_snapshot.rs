use serde::{Deserialize, Serialize};

use crate::entity::Token;

/// Result of a single wallet lookup. The native asset is always first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub address: String,
    pub tokens: Vec<Token>,
    pub total_usd_value: String,
    pub spam_filtered: usize,
    pub malformed_skipped: usize,
}

impl WalletSnapshot {
    pub fn native(&self) -> Option<&Token> {
        self.tokens.first()
    }
}
