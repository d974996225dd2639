use serde::{Deserialize, Serialize};

/// One asset held in a wallet, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,       // Full token name (e.g. "Ethereum")
    pub symbol: String,     // Token symbol (e.g. "ETH")
    pub balance: String,    // Formatted balance
    pub usd_value: String,  // Formatted USD value
    pub raw_usd_value: f64, // Unformatted USD value, used for totals
}
