// src/ethplorer/mod.rs
pub mod config;
pub mod models;
pub mod spam_filter;
pub mod token_parser;
pub mod wallet_fetcher;

pub use config::Config;
pub use models::{NativeRecord, TokenRecord, NATIVE_NAME, NATIVE_SYMBOL};
pub use spam_filter::{is_spam_token, TokenMetadata};
pub use token_parser::{parse_native_token, parse_token};
pub use wallet_fetcher::{EthplorerWalletFetcher, WalletFetcher};
