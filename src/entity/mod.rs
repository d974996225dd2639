mod address;
mod token;
mod wallet_error;
mod wallet_snapshot;

pub use address::{Address, ADDRESS_LENGTH};
pub use token::Token;
pub use wallet_error::WalletError;
pub use wallet_snapshot::WalletSnapshot;
